#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub digits: bool,
    pub symbols: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
}
