pub mod io;
pub mod matrix;
pub mod rgb;
pub mod traits;

pub use self::matrix::PixelMatrix;
pub use self::rgb::{MeanColor, Rgb};
pub use self::traits::{ImageView, Rows};
