use crate::output::Output;
use bookmyseat_client::Notifier;

/// Shows classified request failures as a prominent stderr notice.
pub struct TerminalNotifier {
    output: Output,
}

impl TerminalNotifier {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        self.output.alert(message);
    }
}
