use crate::attribution::domain::{AttributionRecord, License};
use crate::shared::AttributionError;

/// Maximum nesting depth of extras accepted when decoding
const MAX_NESTING_DEPTH: usize = 64;

/// Smallest possible encoded record: empty name, license id and description
/// plus the five list counts
const MIN_RECORD_SIZE: usize = 4 * 8;

/// Binary codec for the `LICENSE.blob` side channel
///
/// Layout (integers big-endian):
///
/// ```text
/// blob   := u32 count, record*count
/// record := string name, string license_id, string description,
///           u32 n, i32*n (copyright years),
///           u32 n, string*n (urls), u32 n, string*n (notes),
///           u32 n, string*n (authors), u32 n, record*n (extras)
/// string := u32 byte_len, UTF-8 bytes
/// ```
pub struct BlobCodec;

impl BlobCodec {
    pub fn encode(records: &[AttributionRecord]) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(256);
        put_len(&mut buffer, records.len());
        for record in records {
            write_record(&mut buffer, record);
        }
        buffer
    }

    /// Decodes a record list. License identifiers that are not in the catalog
    /// decode to `CUSTOM`.
    ///
    /// # Errors
    /// `BlobDecode` for truncated data, invalid UTF-8, nesting deeper than
    /// 64 levels, counts larger than the data could hold, or trailing bytes.
    pub fn decode(bytes: &[u8]) -> Result<Vec<AttributionRecord>, AttributionError> {
        let mut reader = BlobReader::new(bytes);
        let count = reader.read_count(MIN_RECORD_SIZE)?;
        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            records.push(reader.read_record(0)?);
        }
        reader.finish()?;
        Ok(records)
    }
}

impl AttributionRecord {
    /// Encodes this record (and its extras) on its own, without the list header
    pub fn serialize(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(128);
        write_record(&mut buffer, self);
        buffer
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self, AttributionError> {
        let mut reader = BlobReader::new(bytes);
        let record = reader.read_record(0)?;
        reader.finish()?;
        Ok(record)
    }
}

fn put_len(buffer: &mut Vec<u8>, len: usize) {
    let len = u32::try_from(len).unwrap_or(u32::MAX);
    buffer.extend_from_slice(&len.to_be_bytes());
}

fn put_string(buffer: &mut Vec<u8>, value: &str) {
    put_len(buffer, value.len());
    buffer.extend_from_slice(value.as_bytes());
}

fn put_strings(buffer: &mut Vec<u8>, values: &[String]) {
    put_len(buffer, values.len());
    for value in values {
        put_string(buffer, value);
    }
}

fn write_record(buffer: &mut Vec<u8>, record: &AttributionRecord) {
    put_string(buffer, record.name());
    put_string(buffer, record.license().id());
    put_string(buffer, record.description());

    put_len(buffer, record.copyrights().len());
    for year in record.copyrights() {
        buffer.extend_from_slice(&year.to_be_bytes());
    }

    put_strings(buffer, record.urls());
    put_strings(buffer, record.notes());
    put_strings(buffer, record.authors());

    put_len(buffer, record.extras().len());
    for extra in record.extras() {
        write_record(buffer, extra);
    }
}

struct BlobReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> BlobReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], AttributionError> {
        if len > self.remaining() {
            return Err(AttributionError::blob_decode(format!(
                "unexpected end of data at byte {} (needed {} more bytes, {} available)",
                self.position,
                len,
                self.remaining()
            )));
        }
        let slice = &self.bytes[self.position..self.position + len];
        self.position += len;
        Ok(slice)
    }

    fn read_u32(&mut self) -> Result<u32, AttributionError> {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(self.take(4)?);
        Ok(u32::from_be_bytes(raw))
    }

    fn read_i32(&mut self) -> Result<i32, AttributionError> {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(self.take(4)?);
        Ok(i32::from_be_bytes(raw))
    }

    /// Reads a list count, rejecting counts the remaining data cannot hold
    fn read_count(&mut self, min_element_size: usize) -> Result<usize, AttributionError> {
        let count = self.read_u32()? as usize;
        if count.saturating_mul(min_element_size) > self.remaining() {
            return Err(AttributionError::blob_decode(format!(
                "list of {} elements at byte {} exceeds the remaining {} bytes",
                count,
                self.position,
                self.remaining()
            )));
        }
        Ok(count)
    }

    fn read_string(&mut self) -> Result<String, AttributionError> {
        let len = self.read_u32()? as usize;
        let raw = self.take(len)?;
        String::from_utf8(raw.to_vec())
            .map_err(|e| AttributionError::blob_decode(format!("invalid UTF-8 string: {}", e)))
    }

    fn read_strings(&mut self) -> Result<Vec<String>, AttributionError> {
        let count = self.read_count(4)?;
        (0..count).map(|_| self.read_string()).collect()
    }

    fn read_record(&mut self, depth: usize) -> Result<AttributionRecord, AttributionError> {
        if depth >= MAX_NESTING_DEPTH {
            return Err(AttributionError::blob_decode(format!(
                "extras nested deeper than {} levels",
                MAX_NESTING_DEPTH
            )));
        }

        let name = self.read_string()?;
        let license_id = self.read_string()?;
        let license = License::from_id(&license_id).unwrap_or(License::Custom);

        let mut record = AttributionRecord::new(name, license);
        record.set_description(self.read_string()?);

        let years = self.read_count(4)?;
        for _ in 0..years {
            record.add_copyright(self.read_i32()?);
        }
        for url in self.read_strings()? {
            record.add_url(url);
        }
        for note in self.read_strings()? {
            record.add_note(note);
        }
        for author in self.read_strings()? {
            record.add_author(author);
        }

        let extras = self.read_count(MIN_RECORD_SIZE)?;
        for _ in 0..extras {
            let extra = self.read_record(depth + 1)?;
            record.push_extra(extra);
        }

        Ok(record)
    }

    fn finish(&self) -> Result<(), AttributionError> {
        if self.remaining() != 0 {
            return Err(AttributionError::blob_decode(format!(
                "{} trailing bytes after the last record",
                self.remaining()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AttributionRecord {
        let mut record = AttributionRecord::new("Acme App", License::Apache2);
        record
            .set_description("Build tooling for Acme")
            .add_copyright(2018)
            .add_copyright(2019)
            .add_url("https://acme.example")
            .add_note("Contains bundled code")
            .add_author("Acme Corp")
            .add_extra("SSHJ", License::Apache2, |sshj| {
                sshj.author("Jeroen van Erp").extra("Apache MINA", License::Apache2, |mina| {
                    mina.author("The Apache Software Foundation")
                        .extra("Deepest", License::Bsd3, |deep| {
                            deep.copyright(2001).note("three levels down");
                        });
                });
            });
        record
    }

    #[test]
    fn test_record_round_trip_depth_three() {
        let record = sample();
        let bytes = record.serialize();
        assert_eq!(AttributionRecord::deserialize(&bytes).unwrap(), record);
    }

    #[test]
    fn test_list_round_trip() {
        let records = vec![sample(), AttributionRecord::new("Other", License::Mit)];
        let bytes = BlobCodec::encode(&records);
        assert_eq!(BlobCodec::decode(&bytes).unwrap(), records);
    }

    #[test]
    fn test_empty_list() {
        let bytes = BlobCodec::encode(&[]);
        assert_eq!(bytes, vec![0, 0, 0, 0]);
        assert!(BlobCodec::decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_wire_layout_is_big_endian() {
        let mut record = AttributionRecord::new("A", License::Mit);
        record.add_copyright(2020);
        let bytes = record.serialize();

        let mut expected = Vec::new();
        expected.extend_from_slice(&[0, 0, 0, 1, b'A']);
        expected.extend_from_slice(&[0, 0, 0, 3, b'M', b'I', b'T']);
        expected.extend_from_slice(&[0, 0, 0, 0]);
        expected.extend_from_slice(&[0, 0, 0, 1, 0, 0, 0x07, 0xE4]);
        expected.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_unknown_license_id_decodes_to_custom() {
        let mut bytes = Vec::new();
        put_string(&mut bytes, "Foo");
        put_string(&mut bytes, "SOME_FUTURE_LICENSE");
        put_string(&mut bytes, "");
        for _ in 0..5 {
            put_len(&mut bytes, 0);
        }

        let record = AttributionRecord::deserialize(&bytes).unwrap();
        assert_eq!(record.name(), "Foo");
        assert_eq!(record.license(), License::Custom);
    }

    #[test]
    fn test_mit_x11_alias_decodes_to_mit() {
        let mut bytes = Vec::new();
        put_string(&mut bytes, "Foo");
        put_string(&mut bytes, "MIT_X11");
        put_string(&mut bytes, "");
        for _ in 0..5 {
            put_len(&mut bytes, 0);
        }

        assert_eq!(AttributionRecord::deserialize(&bytes).unwrap().license(), License::Mit);
    }

    #[test]
    fn test_truncated_blob_fails() {
        let bytes = BlobCodec::encode(&[sample()]);
        let result = BlobCodec::decode(&bytes[..bytes.len() - 3]);
        assert!(matches!(result, Err(AttributionError::BlobDecode { .. })));
    }

    #[test]
    fn test_trailing_bytes_fail() {
        let mut bytes = BlobCodec::encode(&[sample()]);
        bytes.push(0);
        let err = BlobCodec::decode(&bytes).unwrap_err();
        assert!(err.to_string().contains("trailing bytes"));
    }

    #[test]
    fn test_oversized_count_fails_without_allocating() {
        let bytes = vec![0xFF, 0xFF, 0xFF, 0xFF];
        let err = BlobCodec::decode(&bytes).unwrap_err();
        assert!(err.to_string().contains("exceeds the remaining"));
    }

    #[test]
    fn test_invalid_utf8_fails() {
        let mut bytes = vec![0, 0, 0, 1];
        bytes.extend_from_slice(&[0, 0, 0, 2, 0xC3, 0x28]);
        bytes.extend_from_slice(&[0; 28]);
        let err = BlobCodec::decode(&bytes).unwrap_err();
        assert!(err.to_string().contains("invalid UTF-8"));
    }

    #[test]
    fn test_nesting_limit() {
        let mut record = AttributionRecord::new("leaf", License::Mit);
        for level in 0..MAX_NESTING_DEPTH {
            let mut parent = AttributionRecord::new(format!("level {}", level), License::Mit);
            parent.push_extra(record);
            record = parent;
        }

        let err = AttributionRecord::deserialize(&record.serialize()).unwrap_err();
        assert!(err.to_string().contains("nested deeper"));
    }
}
