use crate::error::{DnsError, Result};

/// Panics if the field runs past the end of `buf`.
pub fn read_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([buf[offset], buf[offset + 1]])
}

pub fn read_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

pub fn write_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
}

pub fn write_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}

/// A bounds-checked cursor over a received message.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Starts reading at `pos`, e.g. just past the header.
    pub fn at(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn ensure(&self, n: usize) -> Result<()> {
        if n > self.remaining() {
            return Err(DnsError::UnexpectedEof {
                offset: self.pos + n,
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let value = self.data[self.pos];
        self.pos += 1;
        Ok(value)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.ensure(2)?;
        let value = read_u16(self.data, self.pos);
        self.pos += 2;
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.ensure(4)?;
        let value = read_u32(self.data, self.pos);
        self.pos += 4;
        Ok(value)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.ensure(len)?;
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_fields() {
        let mut buf = [0u8; 8];
        write_u16(&mut buf, 0, 0xBEEF);
        write_u32(&mut buf, 2, 0x0102_0304);

        assert_eq!(buf, [0xBE, 0xEF, 1, 2, 3, 4, 0, 0]);
        assert_eq!(read_u16(&buf, 0), 0xBEEF);
        assert_eq!(read_u32(&buf, 2), 0x0102_0304);
        assert_eq!(read_u16(&buf, 6), 0);
    }

    #[test]
    #[should_panic]
    fn test_read_past_end_panics() {
        let buf = [0u8; 3];
        read_u16(&buf, 2);
    }

    #[test]
    fn test_reader_tracks_position() {
        let data = [0, 1, 0, 0, 1, 44, 7];
        let mut reader = WireReader::new(&data);

        assert_eq!(reader.read_u16().unwrap(), 1);
        assert_eq!(reader.read_u32().unwrap(), 300);
        assert_eq!(reader.position(), 6);
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.read_u8().unwrap(), 7);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_reader_rejects_overrun() {
        let data = [0, 1, 2];
        let mut reader = WireReader::at(&data, 2);

        assert_eq!(
            reader.read_u16(),
            Err(DnsError::UnexpectedEof { offset: 4 })
        );
        // a failed read does not move the cursor
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.read_bytes(1).unwrap(), &[2]);
        assert!(reader.read_bytes(1).is_err());
    }
}
