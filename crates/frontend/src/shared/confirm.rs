/// Yes/no question put to the operator before a destructive call.
///
/// Any `Fn(&str) -> bool` works, which keeps tests short.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
