//! Ordered value streams used to checkpoint the settings state.
use anyhow::Result;
use bitcode::Decode;
use bitcode::Encode;

use crate::settings::SettingsError;

/// Write side of a checkpoint stream provided by the host.
pub trait Serializer {
    fn put_int(&mut self, value: i32);
    fn put_bool(&mut self, value: bool);
}

/// Read side of a checkpoint stream provided by the host.
///
/// Values have to be read in the order they were written.
pub trait Deserializer {
    fn get_int(&mut self) -> Result<i32>;
    fn get_bool(&mut self) -> Result<bool>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Encode, Decode)]
pub enum StreamValue {
    Int(i32),
    Bool(bool),
}

/// In-memory checkpoint stream for hosts that do not bring their own.
///
/// Values are typed, so reading a value of the wrong kind fails instead of reinterpreting
/// bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateStream {
    values: Vec<StreamValue>,
    cursor: usize,
}

impl StateStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(encoded: &[u8]) -> Result<Self> {
        Ok(Self {
            values: bitcode::decode(encoded)?,
            cursor: 0,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        bitcode::encode(&self.values)
    }

    pub fn values(&self) -> &[StreamValue] {
        &self.values
    }

    /// Number of values that have not been read yet.
    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }

    fn next_value(&mut self) -> Result<StreamValue> {
        let value = self
            .values
            .get(self.cursor)
            .copied()
            .ok_or(SettingsError::StreamExhausted(self.cursor))?;
        self.cursor += 1;
        Ok(value)
    }
}

impl Serializer for StateStream {
    fn put_int(&mut self, value: i32) {
        self.values.push(StreamValue::Int(value));
    }

    fn put_bool(&mut self, value: bool) {
        self.values.push(StreamValue::Bool(value));
    }
}

impl Deserializer for StateStream {
    fn get_int(&mut self) -> Result<i32> {
        match self.next_value()? {
            StreamValue::Int(value) => Ok(value),
            found => Err(SettingsError::StreamMismatch {
                expected: "int",
                found,
            }
            .into()),
        }
    }

    fn get_bool(&mut self) -> Result<bool> {
        match self.next_value()? {
            StreamValue::Bool(value) => Ok(value),
            found => Err(SettingsError::StreamMismatch {
                expected: "bool",
                found,
            }
            .into()),
        }
    }
}
