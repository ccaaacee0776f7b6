pub mod genes_for_symbols;
pub mod genes_from_prot;

pub use genes_for_symbols::GenesForSymbolsRequest;
pub use genes_from_prot::GenesFromProtRequest;
