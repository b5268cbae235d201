use crate::client::models::messages::Message;

pub const EMPTY_PROMPT_MSG: &str = "Please enter a prompt first.";

/// Delay before a transient copy label reverts to its default.
pub const COPY_LABEL_REVERT_MS: u64 = 1400;

/// Label shown on the copy control. `Copied` and `Failed` are transient
/// and revert to `Copy` after a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyLabel {
    #[default]
    Copy,
    Copied,
    Failed,
}

impl std::fmt::Display for CopyLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CopyLabel::Copy => "Copy",
            CopyLabel::Copied => "Copied!",
            CopyLabel::Failed => "Failed",
        };
        write!(f, "{}", s)
    }
}

/// Side effect requested by a transition. The GUI layer turns these into
/// async commands; the state itself performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Convert { prompt: String },
    CopyToClipboard { text: String, epoch: u64 },
    ScheduleCopyReset { epoch: u64 },
}

#[derive(Debug, Clone, Default)]
pub struct ConverterState {
    pub prompt: String,
    pub busy: bool,
    pub output: String,
    pub copy_label: CopyLabel,
    /// Bumped on every copy action; copy completions and revert timers
    /// carrying an older epoch are ignored.
    pub copy_epoch: u64,
}

impl ConverterState {
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::PromptChanged(prompt) => {
                self.prompt = prompt;
                Effect::None
            }
            Message::SubmitPrompt => {
                // One in-flight guard for every trigger path (button and hotkey).
                if self.busy {
                    return Effect::None;
                }
                let trimmed = self.prompt.trim();
                if trimmed.is_empty() {
                    self.output = EMPTY_PROMPT_MSG.to_string();
                    return Effect::None;
                }
                self.busy = true;
                self.output.clear();
                Effect::Convert {
                    prompt: trimmed.to_string(),
                }
            }
            Message::ConvertResult { success: _, output } => {
                // Single completion event for every outcome branch, so busy
                // cannot stay stale on any exit path.
                self.busy = false;
                self.output = output;
                Effect::None
            }
            Message::CopyOutput => {
                if self.output.is_empty() {
                    return Effect::None;
                }
                self.copy_epoch += 1;
                Effect::CopyToClipboard {
                    text: self.output.clone(),
                    epoch: self.copy_epoch,
                }
            }
            Message::CopyResult { success, epoch } => {
                if epoch != self.copy_epoch {
                    return Effect::None;
                }
                self.copy_label = if success {
                    CopyLabel::Copied
                } else {
                    CopyLabel::Failed
                };
                Effect::ScheduleCopyReset { epoch }
            }
            Message::ResetCopyLabel { epoch } => {
                if epoch == self.copy_epoch {
                    self.copy_label = CopyLabel::Copy;
                }
                Effect::None
            }
        }
    }
}
