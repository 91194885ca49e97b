use serde::{Deserialize, Serialize};

/// Options for [`flag_complex`](crate::flag_complex).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagComplexOptions {
    /// Highest simplex order kept in the output; larger cliques are replaced
    /// by their faces of this order. `None` keeps cliques whole.
    pub max_order: Option<usize>,
    /// Promotion probability per simplex order, starting at order 2:
    /// `ps[0]` applies to triangles, `ps[1]` to tetrahedra. Empty promotes
    /// every clique.
    pub ps: Vec<f64>,
}

impl FlagComplexOptions {
    /// Promotes every clique, truncated to `max_order`.
    pub fn up_to(max_order: Option<usize>) -> Self {
        Self {
            max_order,
            ps: Vec::new(),
        }
    }

    /// Replaces the promotion probabilities.
    pub fn with_probabilities(mut self, ps: impl Into<Vec<f64>>) -> Self {
        self.ps = ps.into();
        self
    }

    /// Number of leading entries of `ps` that take part in promotion.
    pub(crate) fn active_orders(&self) -> usize {
        match self.max_order {
            Some(order) => self.ps.len().min(order.saturating_sub(1)),
            None => self.ps.len(),
        }
    }
}

impl Default for FlagComplexOptions {
    fn default() -> Self {
        Self::up_to(Some(2))
    }
}
