pub mod fq;
pub mod fq12;
pub mod fq2;
pub mod fq6;
pub mod fr;

pub use fq::{Fq, FqParameters};
pub use fq12::{Fq12, Fq12Parameters};
pub use fq2::{Fq2, Fq2Parameters};
pub use fq6::{Fq6, Fq6Parameters};
pub use fr::{Fr, FrParameters};
