/// Identifier of the running process, shown in every log line
pub trait ProcessIdentity: Send + Sync {
    fn pid(&self) -> u32;
}

/// The operating system id of this process
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentProcess;

impl ProcessIdentity for CurrentProcess {
    fn pid(&self) -> u32 {
        std::process::id()
    }
}

/// A fixed id
#[derive(Debug, Clone, Copy)]
pub struct FixedProcess(pub u32);

impl ProcessIdentity for FixedProcess {
    fn pid(&self) -> u32 {
        self.0
    }
}
