//! CSV file reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

use crate::error::{IngestError, Result};

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported. Also rejects
/// zero-byte files, since they carry no header to read.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open(path)?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    if bytes_read >= 2 {
        // UTF-16 LE BOM
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        // UTF-16 BE BOM
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads a CSV file with a single header row into a Polars DataFrame.
///
/// Every column is read as text and empty fields are read as null. No type
/// inference happens here, so a stray value deep in the file can never fail
/// the read; typing is left to schema enforcement.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    validate_encoding(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read csv table"
    );

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_table_shape() {
        let file = create_temp_csv("A,B,C\n1,2,3\n4,5,6\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
        assert_eq!(
            df.get_column_names()
                .into_iter()
                .map(|n| n.as_str())
                .collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn test_mixed_column_stays_string() {
        let file = create_temp_csv("amount\n10.5\nabc\n3\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(df.column("amount").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_late_bad_value_does_not_fail_the_read() {
        let mut content = String::from("order_id,amount\n");
        for row in 0..150 {
            let amount = if row == 120 {
                "abc".to_string()
            } else {
                format!("{row}.5")
            };
            content.push_str(&format!("{row},{amount}\n"));
        }
        let file = create_temp_csv(&content);
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(df.height(), 150);
        assert_eq!(df.column("order_id").unwrap().dtype(), &DataType::String);
        let amount = df.column("amount").unwrap().str().unwrap().clone();
        assert_eq!(amount.get(120), Some("abc"));
        assert_eq!(amount.get(0), Some("0.5"));
    }

    #[test]
    fn test_empty_fields_are_null() {
        let file = create_temp_csv("a,b\n1,\n,x\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(df.column("a").unwrap().null_count(), 1);
        assert_eq!(df.column("b").unwrap().null_count(), 1);
    }

    #[test]
    fn test_header_only_yields_zero_rows() {
        let file = create_temp_csv("a,b\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let file = create_temp_csv("");
        let result = read_csv_table(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = read_csv_table(Path::new("/definitely/not/here.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_utf16_bom_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'a', 0x00]).unwrap();

        let result = validate_encoding(file.path());

        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }
}
