use rand::Rng;

/// UV-sphere geometry plus per-vertex displacement seeds.
///
/// Vertices are laid out as a (segments+1) x (segments+1) latitude/longitude
/// grid with the longitude seam duplicated, so positions/normals/seeds all
/// have exactly (segments+1)^2 entries. Seeds are drawn once at build time
/// and never regenerated; all per-frame variation is parametric.
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub seeds: Vec<f32>,
    pub indices: Vec<u32>,
}

impl Mesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// Build a closed UV sphere of the given world-unit radius.
///
/// Rejects degenerate parameters; callers clamp the radius upstream (see
/// `physical::scene_radius_from_mass_lbs`), so an error here is a programming
/// mistake rather than bad user input.
pub fn build(radius: f32, segments: u32, rng: &mut impl Rng) -> anyhow::Result<Mesh> {
    anyhow::ensure!(radius > 0.0, "sphere radius must be positive, got {radius}");
    anyhow::ensure!(segments >= 1, "sphere needs at least 1 segment");

    let ring = (segments + 1) as usize;
    let vertex_count = ring * ring;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut seeds = Vec::with_capacity(vertex_count);

    for lat in 0..=segments {
        let theta = lat as f32 * std::f32::consts::PI / segments as f32;
        let (sin_t, cos_t) = theta.sin_cos();

        for lon in 0..=segments {
            let phi = lon as f32 * 2.0 * std::f32::consts::PI / segments as f32;
            let x = phi.cos() * sin_t;
            let y = cos_t;
            let z = phi.sin() * sin_t;

            positions.push([radius * x, radius * y, radius * z]);
            normals.push([x, y, z]);
            seeds.push(rng.gen::<f32>());
        }
    }

    // Two triangles per grid cell: (a, b, a+1) and (b, b+1, a+1).
    let mut indices = Vec::with_capacity(6 * (segments * segments) as usize);
    for lat in 0..segments {
        for lon in 0..segments {
            let a = lat * (segments + 1) + lon;
            let b = a + segments + 1;
            indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
        }
    }

    Ok(Mesh {
        positions,
        normals,
        seeds,
        indices,
    })
}
