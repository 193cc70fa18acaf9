/// A captured photo or video waiting to be uploaded as evidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceFile {
    /// Local file name or URI; only its extension is used.
    pub source_name: String,
    pub bytes: Vec<u8>,
}

impl EvidenceFile {
    pub fn new(source_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            source_name: source_name.into(),
            bytes,
        }
    }

    /// Lowercased extension after the last '.', if any.
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.source_name.rsplit_once('.')?;
        if ext.is_empty() || ext.contains('/') {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}
