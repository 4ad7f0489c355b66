//! Region extraction, displacement and write-back

use glam::Vec2;

use crate::math::Region;
use crate::terrain::{HeightmapHost, TerrainMetadata};

use super::kernel::{apply_displacement, CraterKernel, DisplacementKernel};
use super::params::CraterParameters;

/// Why a crater was not applied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The square footprint does not fit the heightmap
    OutOfBounds,
}

/// Result of a crater operation. Either the whole region was rewritten or
/// nothing was touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CraterOutcome {
    Applied(Region),
    Skipped { region: Region, reason: SkipReason },
}

impl CraterOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CraterOutcome::Applied(_))
    }

    /// Footprint that was (or would have been) rewritten
    pub fn region(&self) -> Region {
        match self {
            CraterOutcome::Applied(region) | CraterOutcome::Skipped { region, .. } => *region,
        }
    }
}

/// Square texel box around the crater footprint
pub fn derive_region(center: Vec2, radius: f32) -> Region {
    Region::from_center_radius(center, radius)
}

/// Bounds check against a square heightmap of `resolution` texels.
///
/// See [`Region::fits_within`] for the (asymmetric) rules.
pub fn validate_region(region: &Region, resolution: u32) -> bool {
    region.fits_within(resolution, resolution)
}

/// Run any displacement kernel over `region` of the host heightmap.
///
/// Extracts the region, lowers each texel by the kernel's displacement,
/// writes it back at the same offset and asks the host to resync. Out of
/// bounds regions leave the host untouched.
pub fn execute_kernel<H, K>(host: &mut H, kernel: &K, region: Region) -> CraterOutcome
where
    H: HeightmapHost + ?Sized,
    K: DisplacementKernel + ?Sized,
{
    let (width, height) = host.heightmap_size();
    if !region.fits_within(width, height) {
        log::debug!("Skipping crater: region {:?} outside {}x{} heightmap", region, width, height);
        return CraterOutcome::Skipped {
            region,
            reason: SkipReason::OutOfBounds,
        };
    }

    let mut scratch = host.extract_region(&region);
    apply_displacement(&mut scratch, &region, kernel);
    host.write_region(&scratch, &region);
    host.mark_dirty_and_resync(&region);

    log::debug!("Applied crater to region {:?}", region);
    CraterOutcome::Applied(region)
}

/// Carve one crater described by texel-space `params` into the host.
pub fn execute<H: HeightmapHost + ?Sized>(
    host: &mut H,
    metadata: &TerrainMetadata,
    params: &CraterParameters,
) -> CraterOutcome {
    let region = derive_region(params.center, params.radius);
    let kernel = CraterKernel::new(*params, metadata.heightmap_resolution);
    execute_kernel(host, &kernel, region)
}
