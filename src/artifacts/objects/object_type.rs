use crate::artifacts::objects::error::ObjectError;

/// Kind tag from an object header
///
/// Only blobs are readable today; other kinds are added as new variants plus a
/// match arm in [`TryFrom<&str>`], the header parser stays the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ObjectType {
    Blob,
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Blob => "blob",
        }
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = ObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            _ => Err(ObjectError::UnsupportedType(value.to_string())),
        }
    }
}

impl TryFrom<&[u8]> for ObjectType {
    type Error = ObjectError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        match std::str::from_utf8(value) {
            Ok(kind) => ObjectType::try_from(kind),
            Err(_) => Err(ObjectError::UnsupportedType(
                String::from_utf8_lossy(value).into_owned(),
            )),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
