use super::corners::CORNER_COUNT;

/// Edge-adjacent neighbours of each corner.
///
/// The order within each row decides the orientation of the adjacent face
/// normals in the normal solver; do not reorder.
pub const ADJACENCY: [[usize; 3]; CORNER_COUNT] = [
    [1, 3, 4], // top-rear-left
    [0, 2, 5], // top-rear-right
    [1, 3, 6], // top-front-right
    [0, 2, 7], // top-front-left
    [0, 5, 7], // bottom-rear-left
    [1, 4, 6], // bottom-rear-right
    [2, 5, 7], // bottom-front-right
    [3, 4, 6], // bottom-front-left
];

/// Corner reflected through the cube center.
pub const OPPOSITE: [usize; CORNER_COUNT] = [6, 7, 4, 5, 2, 3, 0, 1];

/// One quad patch per face, 4 corner indices in clockwise order seen from outside.
pub const FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // top
    [3, 2, 6, 7], // front
    [0, 3, 7, 4], // left
    [1, 0, 4, 5], // rear
    [2, 1, 5, 6], // right
    [7, 6, 5, 4], // bottom
];

pub const PATCH_INDEX_COUNT: usize = FACES.len() * 4;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Face {
    Top,
    Front,
    Left,
    Rear,
    Right,
    Bottom,
}

impl Face {
    /// All faces in patch order.
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Front,
        Face::Left,
        Face::Rear,
        Face::Right,
        Face::Bottom,
    ];

    #[inline]
    pub const fn corners(self) -> [usize; 4] {
        FACES[self as usize]
    }
}

/// Flattens the face list into a 4-control-point patch index list.
pub fn patch_indices() -> [u32; PATCH_INDEX_COUNT] {
    let mut indices = [0u32; PATCH_INDEX_COUNT];
    for (slot, corner) in indices.iter_mut().zip(FACES.iter().flatten()) {
        *slot = *corner as u32;
    }
    indices
}
