use crate::models::JobRecord;

/// Append-only collection of the records gathered during one search.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<JobRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: JobRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }
}
