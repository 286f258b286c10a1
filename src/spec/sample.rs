//! The reference 10 x 8 m single-room house.

use super::{DoorSpec, FloorSpec, HouseSpec, Openings, RoofSpec, Vec2, WallSpec, WindowSpec};

const WALL_HEIGHT: f64 = 3.0;
const WALL_THICKNESS: f64 = 0.2;

/// Ground contour of the sample house, counter-clockwise from the origin.
#[must_use]
pub fn house_contour() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 8.0),
        Vec2::new(0.0, 8.0),
    ]
}

fn wall(start: Vec2, end: Vec2) -> WallSpec {
    WallSpec {
        start,
        end,
        height: WALL_HEIGHT,
        thickness: WALL_THICKNESS,
        doors: None,
        windows: None,
    }
}

/// Four walls AB, BC, CD, DA; one door and one window on AB.
#[must_use]
pub fn sample_house() -> HouseSpec {
    let contour = house_contour();
    let walls = contour
        .iter()
        .zip(contour.iter().cycle().skip(1))
        .map(|(&a, &b)| wall(a, b))
        .collect();

    HouseSpec {
        floor: FloorSpec {
            contour: contour.clone(),
            thickness: 0.2,
            z: 0.0,
        },
        roof: RoofSpec {
            contour,
            thickness: 0.2,
            z: 3.2,
            overhang: 0.5,
        },
        walls,
        openings: Openings {
            doors: Some(vec![DoorSpec {
                x: 2.5,
                width: 1.0,
                height: 2.1,
                z: None,
            }]),
            windows: Some(vec![WindowSpec {
                x: 6.5,
                width: 1.0,
                height: 1.2,
                z: 0.9,
            }]),
        },
        opening_wall: 0,
    }
}
