//! Random initialization of fully-connected layer weights.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{matrix::Matrix, typ::Elem, Error, Result};

/// Create an `out_nodes` by `in_nodes` matrix of weights drawn uniformly from `[0, 1)`.
///
/// Row `i` holds the weights of the connections into node `i` of the downstream layer, so
/// `in_nodes` must already count any bias node of the upstream layer.
pub fn init_weights<R>(rng: &mut R, out_nodes: usize, in_nodes: usize) -> Result<Matrix<f64>>
where
    R: Rng + ?Sized,
{
    init_weights_with(rng, Uniform::new(0.0, 1.0), out_nodes, in_nodes)
}

/// Create an `out_nodes` by `in_nodes` matrix of weights drawn from `distribution`.
pub fn init_weights_with<R, D, E>(
    rng: &mut R,
    distribution: D,
    out_nodes: usize,
    in_nodes: usize,
) -> Result<Matrix<E>>
where
    R: Rng + ?Sized,
    D: Distribution<E>,
    E: Elem,
{
    log::debug!("initializing {out_nodes}x{in_nodes} weights");
    Matrix::from_fn(out_nodes, in_nodes, |_, _| distribution.sample(&mut *rng))
}

/// Create one weight matrix per pair of adjacent layers.
///
/// Given node counts `[n0, n1, ..., nk]`, matrix `i` has shape `n(i+1)` by `n(i)`.
pub fn init_layers<R>(rng: &mut R, node_counts: &[usize]) -> Result<Vec<Matrix<f64>>>
where
    R: Rng + ?Sized,
{
    if node_counts.len() < 2 {
        return Err(Error::Empty("layers"));
    }
    node_counts
        .windows(2)
        .map(|pair| init_weights(&mut *rng, pair[1], pair[0]))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use rand_distr::StandardNormal;

    use super::*;

    #[test]
    fn shape_and_range() {
        let mut rng = StdRng::seed_from_u64(12345u64);
        let w = init_weights(&mut rng, 3, 5).unwrap();
        assert_eq!(w.rows(), 3);
        assert_eq!(w.cols(), 5);
        assert!(w.ravel().iter().all(|x| (0.0..1.0).contains(x)));
    }

    #[test]
    fn seeded_rngs_agree() {
        let w1 = init_weights(&mut StdRng::seed_from_u64(7), 4, 4).unwrap();
        let w2 = init_weights(&mut StdRng::seed_from_u64(7), 4, 4).unwrap();
        assert_eq!(w1, w2);
    }

    #[test]
    fn zero_dimension() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            init_weights(&mut rng, 0, 3).unwrap_err(),
            Error::ZeroDimension { rows: 0, cols: 3 }
        ));
        assert!(matches!(
            init_weights(&mut rng, 3, 0).unwrap_err(),
            Error::ZeroDimension { rows: 3, cols: 0 }
        ));
    }

    #[test]
    fn custom_distribution() {
        let mut rng = StdRng::seed_from_u64(42);
        let w: Matrix<f32> = init_weights_with(&mut rng, StandardNormal, 2, 8).unwrap();
        assert_eq!(w.shape().map(|d| d.get()), [2, 8]);
        assert!(w.ravel().iter().all(|x| x.is_finite()));
    }

    #[test]
    fn layer_shapes() {
        let mut rng = StdRng::seed_from_u64(1);
        let layers = init_layers(&mut rng, &[3, 4, 2]).unwrap();
        let shapes: Vec<_> = layers.iter().map(|m| (m.rows(), m.cols())).collect();
        assert_eq!(shapes, vec![(4, 3), (2, 4)]);
        assert!(matches!(
            init_layers(&mut rng, &[3]).unwrap_err(),
            Error::Empty("layers")
        ));
    }
}
