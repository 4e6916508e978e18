//! Memoized register identities
//!
//! Building `I^{⊗n}` costs `O(4^n)`, and every shift and embedding needs
//! one, so identities are built once per qubit count and shared through
//! [`Arc`]. Entries are never evicted: qubit counts seen in one process
//! are few and small.
//!
//! A cache is an explicit object. Components hold an `Arc<IdentityCache>`;
//! tests create fresh instances, while [`IdentityCache::shared`] gives a
//! process-wide instance to callers that do not inject one.

use ahash::AHashMap;
use parking_lot::RwLock;
use qdense_core::Matrix;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Statistics about identity cache usage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStatistics {
    /// Lookups served from the cache
    pub hits: usize,
    /// Lookups that had to build the identity
    pub misses: usize,
    /// Number of cached qubit counts
    pub entries: usize,
}

impl CacheStatistics {
    /// Hit rate as a fraction in `[0, 1]`
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for CacheStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "identity cache: {} entries, {} hits, {} misses ({:.1}% hit rate)",
            self.entries,
            self.hits,
            self.misses,
            self.hit_rate() * 100.0
        )
    }
}

/// Thread-safe cache of `2^n × 2^n` identity matrices keyed by `n`
#[derive(Default)]
pub struct IdentityCache {
    entries: RwLock<AHashMap<usize, Arc<Matrix>>>,
    stats: RwLock<CacheStatistics>,
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache shared by components created without one
    pub fn shared() -> Arc<IdentityCache> {
        static SHARED: OnceLock<Arc<IdentityCache>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(IdentityCache::new())))
    }

    /// Identity over `num_qubits` qubits
    ///
    /// The first request for a given count builds `I ⊗ I ⊗ … ⊗ I`; later
    /// requests return the same shared matrix. `num_qubits == 0` yields the
    /// 1×1 identity.
    pub fn identity(&self, num_qubits: usize) -> Arc<Matrix> {
        if let Some(m) = self.entries.read().get(&num_qubits) {
            self.stats.write().hits += 1;
            return Arc::clone(m);
        }

        debug!(num_qubits, "building register identity");
        let built = Arc::new(build_identity(num_qubits));

        // Another thread may have won the race; keep whichever landed first
        let mut entries = self.entries.write();
        let m = Arc::clone(entries.entry(num_qubits).or_insert(built));
        let mut stats = self.stats.write();
        stats.misses += 1;
        stats.entries = entries.len();
        m
    }

    /// Whether an identity for `num_qubits` has been built
    pub fn contains(&self, num_qubits: usize) -> bool {
        self.entries.read().contains_key(&num_qubits)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop all cached identities and reset statistics
    ///
    /// Matrices already handed out stay valid; later requests rebuild them.
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        entries.clear();
        *self.stats.write() = CacheStatistics::default();
    }

    pub fn statistics(&self) -> CacheStatistics {
        self.stats.read().clone()
    }
}

impl fmt::Debug for IdentityCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<usize> = self.entries.read().keys().copied().collect();
        counts.sort_unstable();
        f.debug_struct("IdentityCache")
            .field("qubit_counts", &counts)
            .finish()
    }
}

fn build_identity(num_qubits: usize) -> Matrix {
    if num_qubits == 0 {
        return Matrix::identity(1);
    }
    let i = Matrix::i();
    let mut m = Matrix::i();
    for _ in 1..num_qubits {
        m = m.tensor(&i);
    }
    m
}
