pub(crate) mod boxes;
pub(crate) mod migrate;
pub(crate) mod serve;
