/** ------------------------------------------------------------
 * Byte order selection
 * ------------------------------------------------------------- */
use crate::errors::ConfigError;
use std::fmt;
use std::str::FromStr;

/**
 * Byte order used to interpret a multi-byte integer.
 *
 * `Native` is the byte order of the compile target. It has to be
 * chosen explicitly, so a caller always knows when results are
 * host dependent.
 */
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ByteOrder {
    Little,
    Big,
    #[default]
    Native,
}

impl ByteOrder {
    /// Replace `Native` with the concrete order of the target.
    pub fn resolve(self) -> ByteOrder {
        match self {
            ByteOrder::Native if cfg!(target_endian = "big") => ByteOrder::Big,
            ByteOrder::Native => ByteOrder::Little,
            order => order,
        }
    }

    pub fn is_little(self) -> bool {
        self.resolve() == ByteOrder::Little
    }
}

impl FromStr for ByteOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "little" | "le" => Ok(ByteOrder::Little),
            "big" | "be" => Ok(ByteOrder::Big),
            "native" | "ne" => Ok(ByteOrder::Native),
            _ => Err(ConfigError::UnknownByteOrder(s.to_string())),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ByteOrder::Little => "little",
            ByteOrder::Big => "big",
            ByteOrder::Native => "native",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_matches_target() {
        let expected = if cfg!(target_endian = "little") {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        };
        assert_eq!(ByteOrder::Native.resolve(), expected);
        assert_eq!(ByteOrder::Big.resolve(), ByteOrder::Big);
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("LE".parse::<ByteOrder>(), Ok(ByteOrder::Little));
        assert_eq!("big".parse::<ByteOrder>(), Ok(ByteOrder::Big));
        assert_eq!("Native".parse::<ByteOrder>(), Ok(ByteOrder::Native));
        assert_eq!(
            "middle".parse::<ByteOrder>(),
            Err(ConfigError::UnknownByteOrder("middle".into()))
        );
    }
}
