use crate::domain::page::Section;
use std::time::Duration;

/// Deferred work the runtime performs on behalf of the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ScrollToSection { section: Section, delay: Duration },
    DeferredClose { generation: u64, delay: Duration },
}
