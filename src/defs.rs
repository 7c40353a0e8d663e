use crate::die::Die;
use crate::Seed;

macro_rules! standard_die {
    ($name:ident, $faces:literal) => {
        #[must_use]
        pub fn $name(seed: Seed) -> Die {
            Die::uniform($faces, seed)
        }
    };
}

standard_die!(d2, 2);
standard_die!(d4, 4);
standard_die!(d6, 6);
standard_die!(d8, 8);
standard_die!(d10, 10);
standard_die!(d12, 12);
standard_die!(d20, 20);
standard_die!(d100, 100);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faces() {
        assert_eq!(d6(0).max(), 6);
        assert_eq!(d20(0).max(), 20);
        assert_eq!(d100(7).max(), 100);
        assert_eq!(d100(7).seed(), 7);
    }
}
