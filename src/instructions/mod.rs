pub mod add;
pub mod initialize;
pub mod subtract;
pub mod terminate;
pub mod update;

pub use add::*;
pub use initialize::*;
pub use subtract::*;
pub use terminate::*;
pub use update::*;
