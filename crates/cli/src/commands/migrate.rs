//! Schema migration command.
//!
//! Opening a backend already runs every pending step; this prints the report.

pub(crate) async fn run() -> anyhow::Result<()> {
    let (storage, report) = crate::open_backend().await?;
    if report.is_noop() {
        println!("{}: schema up to date", storage.kind());
    } else {
        println!("{}: {report}", storage.kind());
    }
    Ok(())
}
