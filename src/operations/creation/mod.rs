mod assemble_house;
mod make_box;
mod make_opening;
mod make_slab;
mod make_wall;

pub use assemble_house::{AssembleHouse, HouseParts};
pub use make_box::MakeBox;
pub use make_opening::{MakeOpening, Opening};
pub use make_slab::{MakeFloor, MakeRoof};
pub use make_wall::MakeWall;
