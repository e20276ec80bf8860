//! # Escolha Aleatória Injetável
//!
//! Toda escolha aleatória da política de diálogo (qual resposta do pool,
//! qual emoji) passa por um [`Chooser`]. Em produção é um gerador
//! `ChaCha8Rng`; em testes, um [`FixedChooser`] torna a saída reproduzível
//! e permite enumerar todos os membros de um pool.

use rand::Rng;

/// Fonte de índices para escolhas em pools.
pub trait Chooser {
    /// Retorna um índice em `0..len`. `len` é sempre > 0.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng> Chooser for R {
    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Escolhe sempre `n % len`: útil para varrer pools em testes.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedChooser(pub usize);

impl Chooser for FixedChooser {
    fn index(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

/// Escolhe um elemento de um slice não vazio.
pub fn pick<'a, T>(items: &'a [T], chooser: &mut dyn Chooser) -> &'a T {
    &items[chooser.index(items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn fixed_chooser_wraps() {
        let mut c = FixedChooser(7);
        assert_eq!(c.index(3), 1);
        assert_eq!(*pick(&["a", "b", "c"], &mut c), "b");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let pool = ["a", "b", "c", "d", "e"];
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        let xs: Vec<_> = (0..20).map(|_| *pick(&pool, &mut a)).collect();
        let ys: Vec<_> = (0..20).map(|_| *pick(&pool, &mut b)).collect();
        assert_eq!(xs, ys);
    }
}
