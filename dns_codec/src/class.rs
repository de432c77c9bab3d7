use std::fmt;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Class {
    #[default]
    In,
    Unknown(u16),
}

const CLASS_IN: u16 = 1;

impl From<u16> for Class {
    fn from(value: u16) -> Self {
        match value {
            CLASS_IN => Class::In,
            _ => Class::Unknown(value),
        }
    }
}

impl From<Class> for u16 {
    fn from(value: Class) -> Self {
        match value {
            Class::In => CLASS_IN,
            Class::Unknown(code) => code,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Class::In => f.write_str("IN"),
            Class::Unknown(code) => write!(f, "{}", code),
        }
    }
}
