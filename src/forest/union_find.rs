//! Disjoint-set (union-find) over island indices.

#[derive(Debug)]
pub(crate) struct UnionFind {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        let mut parent = Vec::with_capacity(n);
        for i in 0..n {
            parent.push(i as u32);
        }
        Self {
            parent,
            rank: vec![0; n],
        }
    }

    /// Representative of the class containing `x`.
    ///
    /// Compresses by halving: every node visited on the way up is relinked
    /// to its grandparent, so repeated finds flatten the chain.
    pub fn find(&mut self, x: u32) -> u32 {
        let mut x = x;
        loop {
            let p = self.parent[x as usize];
            if p == x {
                return x;
            }
            let gp = self.parent[p as usize];
            self.parent[x as usize] = gp;
            x = gp;
        }
    }

    /// Union by rank over two already-found, distinct representatives.
    ///
    /// The lower-rank tree goes under the higher-rank root; on equal ranks
    /// `a` absorbs `b` and its rank grows by one.
    pub fn union_roots(&mut self, a: u32, b: u32) {
        debug_assert_ne!(a, b);
        debug_assert_eq!(self.parent[a as usize], a);
        debug_assert_eq!(self.parent[b as usize], b);

        let rank_a = self.rank[a as usize];
        let rank_b = self.rank[b as usize];
        if rank_a < rank_b {
            self.parent[a as usize] = b;
        } else {
            self.parent[b as usize] = a;
            if rank_a == rank_b {
                self.rank[a as usize] = rank_a.saturating_add(1);
            }
        }
    }
}
