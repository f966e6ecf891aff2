//! PDF Object Model
//!
//! The subset of PDF object types the report document needs, plus a
//! serializer that writes them in a fixed, byte-stable layout.
//! Dictionaries keep insertion order so `/Type` always comes first.

use std::io::{self, Write};

/// PDF object types
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    /// Integer number
    Integer(i64),
    /// Real number, written without a fractional part when integral
    Real(f64),
    /// Name object (starts with /)
    Name(String),
    /// Array of objects
    Array(Vec<PdfObject>),
    /// Dictionary (key-value pairs)
    Dictionary(PdfDictionary),
    /// Stream (dictionary + byte data)
    Stream(PdfStream),
    /// Indirect reference (object number, generation number)
    Reference(u32, u16),
}

/// PDF dictionary (insertion-ordered key-value pairs)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfDictionary {
    entries: Vec<(String, PdfObject)>,
}

impl PdfDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key-value pair, replacing an existing value in place
    pub fn insert(&mut self, key: impl Into<String>, value: PdfObject) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: PdfObject) -> Self {
        self.insert(key, value);
        self
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PdfObject)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Set the Type entry (common for PDF objects)
    pub fn with_type(self, type_name: &str) -> Self {
        self.with("Type", PdfObject::name(type_name))
    }
}

/// PDF stream (dictionary + data)
#[derive(Debug, Clone, PartialEq)]
pub struct PdfStream {
    /// Stream dictionary
    pub dict: PdfDictionary,
    /// Uncompressed stream data
    pub data: Vec<u8>,
}

impl PdfStream {
    /// Create a stream whose `/Length` is the byte length of `data`
    pub fn new(data: Vec<u8>) -> Self {
        let dict = PdfDictionary::new().with("Length", PdfObject::Integer(data.len() as i64));
        Self { dict, data }
    }
}

/// Serializer for PDF objects
pub struct PdfSerializer<W: Write> {
    writer: W,
}

impl<W: Write> PdfSerializer<W> {
    /// Create a new serializer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a PDF object
    pub fn write_object(&mut self, obj: &PdfObject) -> io::Result<()> {
        match obj {
            PdfObject::Integer(n) => write!(self.writer, "{}", n),
            PdfObject::Real(n) => write!(self.writer, "{}", format_real(*n)),
            PdfObject::Name(name) => self.write_name(name),
            PdfObject::Array(arr) => self.write_array(arr),
            PdfObject::Dictionary(dict) => self.write_dictionary(dict),
            PdfObject::Stream(stream) => self.write_stream(stream),
            PdfObject::Reference(obj_num, gen_num) => {
                write!(self.writer, "{} {} R", obj_num, gen_num)
            }
        }
    }

    /// Write a PDF name
    fn write_name(&mut self, name: &str) -> io::Result<()> {
        write!(self.writer, "/")?;
        for byte in name.bytes() {
            match byte {
                b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' => {
                    write!(self.writer, "#{:02X}", byte)?
                }
                0x21..=0x7E => self.writer.write_all(&[byte])?,
                _ => write!(self.writer, "#{:02X}", byte)?,
            }
        }
        Ok(())
    }

    /// Write a PDF array
    fn write_array(&mut self, arr: &[PdfObject]) -> io::Result<()> {
        write!(self.writer, "[")?;
        for (i, obj) in arr.iter().enumerate() {
            if i > 0 {
                write!(self.writer, " ")?;
            }
            self.write_object(obj)?;
        }
        write!(self.writer, "]")
    }

    /// Write a PDF dictionary
    fn write_dictionary(&mut self, dict: &PdfDictionary) -> io::Result<()> {
        write!(self.writer, "<<")?;
        for (key, value) in dict.iter() {
            write!(self.writer, " ")?;
            self.write_name(key)?;
            write!(self.writer, " ")?;
            self.write_object(value)?;
        }
        write!(self.writer, " >>")
    }

    /// Write a PDF stream
    fn write_stream(&mut self, stream: &PdfStream) -> io::Result<()> {
        self.write_dictionary(&stream.dict)?;
        write!(self.writer, "\nstream\n")?;
        self.writer.write_all(&stream.data)?;
        write!(self.writer, "\nendstream")
    }

    /// Consume the serializer and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Serialize a single object to bytes
pub fn serialize(obj: &PdfObject) -> Vec<u8> {
    let mut serializer = PdfSerializer::new(Vec::new());
    // Writing into a Vec cannot fail
    let _ = serializer.write_object(obj);
    serializer.into_inner()
}

/// Format a number the way content streams and arrays expect it
pub(crate) fn format_real(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        let s = format!("{:.4}", n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

// Convenience constructors for PdfObject
impl PdfObject {
    /// Create an integer object
    pub fn int(n: i64) -> Self {
        PdfObject::Integer(n)
    }

    /// Create a real number object
    pub fn real(n: f64) -> Self {
        PdfObject::Real(n)
    }

    /// Create a name object
    pub fn name(s: impl Into<String>) -> Self {
        PdfObject::Name(s.into())
    }

    /// Create a reference object to generation 0
    pub fn reference(obj_num: u32) -> Self {
        PdfObject::Reference(obj_num, 0)
    }

    /// Create an array from a vector of objects
    pub fn array(objects: Vec<PdfObject>) -> Self {
        PdfObject::Array(objects)
    }
}

impl From<PdfDictionary> for PdfObject {
    fn from(dict: PdfDictionary) -> Self {
        PdfObject::Dictionary(dict)
    }
}

impl From<PdfStream> for PdfObject {
    fn from(stream: PdfStream) -> Self {
        PdfObject::Stream(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string(obj: &PdfObject) -> String {
        String::from_utf8(serialize(obj)).unwrap()
    }

    #[test]
    fn test_serialize_integer() {
        assert_eq!(to_string(&PdfObject::Integer(42)), "42");
    }

    #[test]
    fn test_serialize_real() {
        assert_eq!(to_string(&PdfObject::Real(612.0)), "612");
        assert_eq!(to_string(&PdfObject::Real(-16.0)), "-16");
        assert_eq!(to_string(&PdfObject::Real(10.5)), "10.5");
    }

    #[test]
    fn test_serialize_name() {
        assert_eq!(to_string(&PdfObject::name("Type")), "/Type");
        assert_eq!(to_string(&PdfObject::name("A B")), "/A#20B");
    }

    #[test]
    fn test_serialize_array() {
        let arr = PdfObject::array(vec![
            PdfObject::int(0),
            PdfObject::int(0),
            PdfObject::real(612.0),
        ]);
        assert_eq!(to_string(&arr), "[0 0 612]");
    }

    #[test]
    fn test_serialize_reference() {
        assert_eq!(to_string(&PdfObject::reference(3)), "3 0 R");
    }

    #[test]
    fn test_dictionary_keeps_insertion_order() {
        let dict = PdfDictionary::new()
            .with_type("Catalog")
            .with("Pages", PdfObject::reference(2));
        assert_eq!(to_string(&dict.into()), "<< /Type /Catalog /Pages 2 0 R >>");
    }

    #[test]
    fn test_dictionary_insert_replaces_in_place() {
        let mut dict = PdfDictionary::new()
            .with("A", PdfObject::int(1))
            .with("B", PdfObject::int(2));
        dict.insert("A", PdfObject::int(3));

        assert_eq!(to_string(&dict.into()), "<< /A 3 /B 2 >>");
    }

    #[test]
    fn test_nested_dictionary() {
        let fonts = PdfDictionary::new().with("F1", PdfObject::reference(5));
        let resources = PdfDictionary::new().with("Font", fonts.into());
        assert_eq!(to_string(&resources.into()), "<< /Font << /F1 5 0 R >> >>");
    }

    #[test]
    fn test_serialize_stream() {
        let stream = PdfStream::new(b"BT\nET".to_vec());
        assert_eq!(
            to_string(&stream.into()),
            "<< /Length 5 >>\nstream\nBT\nET\nendstream"
        );
    }
}
