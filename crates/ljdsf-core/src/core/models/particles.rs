use nalgebra::{Point3, Vector3};

/// Read-only view of host-owned particle data for one partition.
///
/// Indices `0..nlocal` are owned particles; indices `nlocal..len()` are ghost copies of
/// particles owned elsewhere (periodic images or neighboring partitions).
#[derive(Debug, Clone, Copy)]
pub struct ParticleView<'a> {
    pub positions: &'a [Point3<f64>],
    pub charges: &'a [f64],
    pub types: &'a [usize],
    pub nlocal: usize,
}

impl<'a> ParticleView<'a> {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn is_local(&self, index: usize) -> bool {
        index < self.nlocal
    }
}

/// Owned particle storage, used by drivers that act as their own host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleSystem {
    positions: Vec<Point3<f64>>,
    charges: Vec<f64>,
    types: Vec<usize>,
    forces: Vec<Vector3<f64>>,
    nlocal: usize,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an owned particle. Owned particles must be added before any ghosts.
    pub fn add_local(&mut self, position: Point3<f64>, charge: f64, particle_type: usize) -> usize {
        debug_assert_eq!(self.nlocal, self.positions.len(), "locals after ghosts");
        let index = self.push(position, charge, particle_type);
        self.nlocal += 1;
        index
    }

    pub fn add_ghost(&mut self, position: Point3<f64>, charge: f64, particle_type: usize) -> usize {
        self.push(position, charge, particle_type)
    }

    fn push(&mut self, position: Point3<f64>, charge: f64, particle_type: usize) -> usize {
        self.positions.push(position);
        self.charges.push(charge);
        self.types.push(particle_type);
        self.forces.push(Vector3::zeros());
        self.positions.len() - 1
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn nlocal(&self) -> usize {
        self.nlocal
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    pub fn charges(&self) -> &[f64] {
        &self.charges
    }

    pub fn types(&self) -> &[usize] {
        &self.types
    }

    pub fn local_types(&self) -> &[usize] {
        &self.types[..self.nlocal]
    }

    pub fn forces(&self) -> &[Vector3<f64>] {
        &self.forces
    }

    pub fn clear_forces(&mut self) {
        self.forces.iter_mut().for_each(|f| *f = Vector3::zeros());
    }

    /// Lends the read-only particle data together with the mutable force accumulator.
    pub fn split(&mut self) -> (ParticleView<'_>, &mut [Vector3<f64>]) {
        (
            ParticleView {
                positions: &self.positions,
                charges: &self.charges,
                types: &self.types,
                nlocal: self.nlocal,
            },
            &mut self.forces,
        )
    }
}
