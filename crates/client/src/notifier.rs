/// Blocking user prompts, provided by whatever renders the view.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);

    /// `true` if the user accepted.
    fn confirm(&self, message: &str) -> bool;
}
