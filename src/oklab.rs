//! A color in the Oklab perceptual color space.
//! <https://bottosson.github.io/posts/oklab/>

use std::hash::{Hash, Hasher};

use bytemuck::{Pod, Zeroable};

use crate::{
    math::{Vec3, Vec4},
    Component,
};

oklab_macros::gen_model! {
    /// A color in the Oklab color space, with alpha.
    ///
    /// Components are not constrained to their nominal ranges, so colors out
    /// of the sRGB gamut can be represented and carried through arithmetic.
    ///
    /// Equality and hashing compare the bit patterns of the components, which
    /// makes the type usable as a key in a `HashMap`. This means `0.0` and
    /// `-0.0` are different components and a `NaN` component equals itself.
    #[repr(C)]
    #[derive(Pod, Zeroable)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Oklab {
        /// Lightness, nominally `[0.0, 1.0]`.
        pub l: Component,
        /// Distance along the green-red axis, nominally `[-0.4, 0.4]`.
        pub a: Component,
        /// Distance along the blue-yellow axis, nominally `[-0.4, 0.4]`.
        pub b: Component,
        /// Alpha, nominally `[0.0, 1.0]`.
        pub alpha: Component,
    }
}

impl Oklab {
    /// All components, including alpha, set to zero. Note that this is fully
    /// transparent, unlike [`Oklab::default`] which is opaque black.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Return [`Oklab::ZERO`].
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Create a fully opaque color.
    pub const fn opaque(l: Component, a: Component, b: Component) -> Self {
        Self::new(l, a, b, 1.0)
    }

    /// Create a color from a `(l, a, b)` vector and an alpha.
    pub fn from_vec3(oklab: Vec3, alpha: Component) -> Self {
        Self::new(oklab.x, oklab.y, oklab.z, alpha)
    }

    /// Create a color from a `(l, a, b, alpha)` vector.
    pub fn from_vec4(oklab_with_alpha: Vec4) -> Self {
        let [l, a, b, alpha] = oklab_with_alpha;
        Self::new(l, a, b, alpha)
    }

    /// Return the `(l, a, b)` components as a vector.
    pub fn oklab(&self) -> Vec3 {
        Vec3::new(self.l, self.a, self.b)
    }

    /// Return the `(l, a, b, alpha)` components as a vector.
    pub const fn oklab_with_alpha(&self) -> Vec4 {
        self.to_array()
    }

    /// View the components as an array, in the order `l`, `a`, `b`, `alpha`.
    pub fn as_array(&self) -> &[Component; 4] {
        bytemuck::cast_ref(self)
    }

    /// Mutable view of the components as an array, in the order `l`, `a`,
    /// `b`, `alpha`.
    pub fn as_mut_array(&mut self) -> &mut [Component; 4] {
        bytemuck::cast_mut(self)
    }

    /// Overwrite every component with the ones from `other`.
    pub fn set_oklab(&mut self, other: Oklab) -> &mut Self {
        *self = other;
        self
    }

    /// The distance between two colors, ignoring alpha (deltaEOK).
    /// <https://drafts.csswg.org/css-color-4/#color-difference-OK>
    pub fn delta_e(&self, other: &Oklab) -> Component {
        let (dl, da, db) = (self.l - other.l, self.a - other.a, self.b - other.b);
        (dl * dl + da * da + db * db).sqrt()
    }

    fn bits(&self) -> [BitPattern; 4] {
        self.to_array().map(Component::to_bits)
    }
}

#[cfg(feature = "f64")]
type BitPattern = u64;

#[cfg(not(feature = "f64"))]
type BitPattern = u32;

impl Default for Oklab {
    fn default() -> Self {
        Self::opaque(0.0, 0.0, 0.0)
    }
}

impl PartialEq for Oklab {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Oklab {}

impl Hash for Oklab {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{hash_map::DefaultHasher, HashMap};

    use super::*;
    use crate::Error;

    fn hash_of(value: &Oklab) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn constructors() {
        let c = Oklab::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!((c.l, c.a, c.b, c.alpha), (0.1, 0.2, 0.3, 0.4));

        assert_eq!(Oklab::opaque(0.1, 0.2, 0.3).alpha, 1.0);
        assert_eq!(Oklab::default(), Oklab::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Oklab::zeroed(), Oklab::ZERO);
        assert_eq!(Oklab::from_vec3(Vec3::new(0.1, 0.2, 0.3), 0.4), c);
        assert_eq!(c.with_alpha(0.9), Oklab::new(0.1, 0.2, 0.3, 0.9));
    }

    #[test]
    fn zero_is_transparent() {
        let zero = Oklab::zero();
        assert_eq!(zero.to_array(), [0.0, 0.0, 0.0, 0.0]);
        assert_ne!(zero, Oklab::default());
    }

    #[test]
    fn vec4_alpha_comes_from_the_fourth_component() {
        let c = Oklab::from_vec4([0.5, -0.1, 0.1, 0.25]);
        assert_eq!(c.alpha, 0.25);
        assert_eq!(c.b, 0.1);
        assert_eq!(Oklab::from([0.5, -0.1, 0.1, 0.25]), c);
    }

    #[test]
    fn vectors_out() {
        let c = Oklab::new(0.5, -0.1, 0.1, 0.25);
        assert_eq!(c.oklab(), Vec3::new(0.5, -0.1, 0.1));
        assert_eq!(c.oklab_with_alpha(), [0.5, -0.1, 0.1, 0.25]);
    }

    #[test]
    fn elem_is_bounds_checked() {
        let c = Oklab::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.elem(0), Ok(0.1));
        assert_eq!(c.elem(1), Ok(0.2));
        assert_eq!(c.elem(2), Ok(0.3));
        assert_eq!(c.elem(3), Ok(0.4));
        assert_eq!(c.elem(4), Err(Error::OutOfRange { index: 4 }));
        assert_eq!(c.elem(usize::MAX), Err(Error::OutOfRange { index: usize::MAX }));
    }

    #[test]
    fn array_views_alias_the_components() {
        let mut c = Oklab::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.as_array(), &[0.1, 0.2, 0.3, 0.4]);

        c.as_mut_array()[1] = -0.2;
        assert_eq!(c.a, -0.2);
    }

    #[test]
    fn with_replaces_a_single_component() {
        let c = Oklab::new(0.1, 0.2, 0.3, 0.4);

        assert_eq!(c.with_l(0.9), Oklab::new(0.9, 0.2, 0.3, 0.4));
        assert_eq!(c.with_a(-0.3), Oklab::new(0.1, -0.3, 0.3, 0.4));
        assert_eq!(c.with_b(-0.1), Oklab::new(0.1, 0.2, -0.1, 0.4));
        assert_eq!(c.with_alpha(1.0), Oklab::new(0.1, 0.2, 0.3, 1.0));

        // The original is untouched.
        assert_eq!(c, Oklab::new(0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn setters_chain() {
        let mut c = Oklab::default();
        c.set_l(0.7).set_a(0.1).set_b(-0.1).set_alpha(0.5);
        assert_eq!(c, Oklab::new(0.7, 0.1, -0.1, 0.5));

        c.set(0.2, 0.0, 0.0, 1.0).set_alpha(0.3);
        assert_eq!(c, Oklab::new(0.2, 0.0, 0.0, 0.3));

        c.set_oklab(Oklab::ZERO).set_l(1.0);
        assert_eq!(c, Oklab::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn equal_values_hash_equal() {
        let a = Oklab::new(0.6, 0.1, -0.2, 1.0);
        let b = Oklab::new(0.6, 0.1, -0.2, 1.0);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        assert_ne!(a, a.with_alpha(0.5));
        assert_ne!(hash_of(&a), hash_of(&a.with_alpha(0.5)));
    }

    #[test]
    fn equality_is_bitwise() {
        assert_ne!(Oklab::opaque(0.0, 0.0, 0.0), Oklab::opaque(-0.0, 0.0, 0.0));

        let nan = Oklab::opaque(Component::NAN, 0.0, 0.0);
        assert_eq!(nan, nan);
    }

    #[test]
    fn usable_as_a_map_key() {
        let mut names = HashMap::new();
        names.insert(Oklab::opaque(1.0, 0.0, 0.0), "white");
        names.insert(Oklab::opaque(0.0, 0.0, 0.0), "black");

        assert_eq!(names.get(&Oklab::opaque(1.0, 0.0, 0.0)), Some(&"white"));
        assert_eq!(names.get(&Oklab::ZERO), None);
    }

    #[test]
    fn delta_e_ignores_alpha() {
        let a = Oklab::new(0.5, 0.0, 0.0, 1.0);
        let b = Oklab::new(0.5, 0.375, 0.5, 0.0);
        assert_eq!(a.delta_e(&b), 0.625);
        assert_eq!(a.delta_e(&a.with_alpha(0.0)), 0.0);
    }
}
