pub mod lookup;
pub mod lookup_a;

pub use lookup::LookupUseCase;
pub use lookup_a::LookupAUseCase;
