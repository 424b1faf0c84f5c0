use crate::{State, Time};

pub trait Drift<P>: Send + Sync {
    fn mu(&self, u: &State, p: &P, t: Time) -> State;
}

impl<P, F> Drift<P> for F
where
    F: Fn(&State, &P, Time) -> State + Send + Sync,
{
    fn mu(&self, u: &State, p: &P, t: Time) -> State {
        self(u, p, t)
    }
}
