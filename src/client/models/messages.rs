#[derive(Debug, Clone)]
pub enum Message {
    PromptChanged(String),
    /// Triggered by the convert button or the platform-modifier + Enter hotkey.
    SubmitPrompt,
    ConvertResult { success: bool, output: String },
    CopyOutput,
    CopyResult { success: bool, epoch: u64 },
    ResetCopyLabel { epoch: u64 },
}
