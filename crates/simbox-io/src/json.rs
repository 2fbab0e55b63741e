use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::IoError;

/// Read a JSON document into a deserializable value.
///
/// # Arguments
///
/// * `file_path` - The path to the JSON file.
pub fn read_json<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> Result<T, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let reader = BufReader::new(File::open(file_path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Write a serializable value as a pretty printed JSON document.
///
/// # Arguments
///
/// * `file_path` - The path to the JSON file.
/// * `value` - The value to serialize.
pub fn write_json<T: Serialize>(file_path: impl AsRef<Path>, value: &T) -> Result<(), IoError> {
    let mut writer = BufWriter::new(File::create(file_path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
