use nalgebra::{DMatrix, DVector};
use serde::{Serialize, Deserialize};

pub type Time = f64;

/// Output of a diffusion function. Diagonal noise is a `D x 1` column.
pub type NoiseMatrix = DMatrix<f64>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State(pub DVector<f64>);

impl State {
    pub fn new(values: Vec<f64>) -> Self {
        State(DVector::from_vec(values))
    }

    pub fn zeros(n: usize) -> Self {
        State(DVector::zeros(n))
    }

    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// The state as a `D x 1` matrix, the buffer shape used for diagonal noise.
    pub fn to_column(&self) -> NoiseMatrix {
        DMatrix::from_column_slice(self.dim(), 1, self.0.as_slice())
    }
}

impl std::ops::Deref for State {
    type Target = DVector<f64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for State {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl std::ops::Add for &State {
    type Output = State;

    fn add(self, other: &State) -> State {
        State(&self.0 + &other.0)
    }
}

impl std::ops::Mul<f64> for &State {
    type Output = State;

    fn mul(self, c: f64) -> State {
        State(&self.0 * c)
    }
}

impl From<DVector<f64>> for State {
    fn from(v: DVector<f64>) -> Self {
        State(v)
    }
}

impl From<Vec<f64>> for State {
    fn from(v: Vec<f64>) -> Self {
        State::new(v)
    }
}
