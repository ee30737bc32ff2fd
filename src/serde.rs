//! Impl the `serde::Serialize` and `serde::Deserialize` traits.

use crate::SliceBuf;
use std::fmt::Formatter;

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl serde::Serialize for SliceBuf {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        if serializer.is_human_readable() {
            self.to_string().serialize(serializer)
        } else {
            serializer.serialize_bytes(self.as_bytes())
        }
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> serde::Deserialize<'de> for SliceBuf {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct SliceBufVisitor;

        impl<'de> serde::de::Visitor<'de> for SliceBufVisitor {
            type Value = SliceBuf;

            #[inline]
            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                write!(formatter, "a VelocyPack value as hex string or bytes")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<SliceBuf, E>
            where
                E: serde::de::Error,
            {
                hex::decode(v)
                    .map(SliceBuf::from_bytes)
                    .map_err(serde::de::Error::custom)
            }

            #[inline]
            fn visit_bytes<E>(self, v: &[u8]) -> Result<SliceBuf, E>
            where
                E: serde::de::Error,
            {
                Ok(SliceBuf::from_bytes(v.to_vec()))
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(SliceBufVisitor)
        } else {
            deserializer.deserialize_bytes(SliceBufVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde() {
        let buf = SliceBuf::from_hex("0b0f03416131416232416333030609");

        let bin = bincode::serialize(&buf).unwrap();
        let bin_buf: SliceBuf = bincode::deserialize(&bin).unwrap();
        assert_eq!(bin_buf, buf);

        let json = serde_json::to_string(&buf).unwrap();
        assert_eq!(json, "\"0b0f03416131416232416333030609\"");
        let json_buf: SliceBuf = serde_json::from_str(&json).unwrap();
        assert_eq!(json_buf, buf);
    }
}
