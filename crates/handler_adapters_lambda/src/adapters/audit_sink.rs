pub trait AuditSink {
    fn append(&self, line: &str) -> Result<(), String>;
}
