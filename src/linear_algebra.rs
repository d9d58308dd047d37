use itertools::izip;

pub trait VectorOps<const D: usize> {
    /// Vector [dot product](https://en.wikipedia.org/wiki/Dot_product).
    fn dot_product(&self, other: &[f32; D]) -> f32;

    /// Translate by `offset`.
    fn translate(&self, offset: &[f32; D]) -> [f32; D];

    /// Vector from `other` to `self`.
    fn difference(&self, other: &[f32; D]) -> [f32; D];

    /// Multiply every component by `factor`.
    fn scale(&self, factor: f32) -> [f32; D];

    /// [Euclidean distance](https://en.wikipedia.org/wiki/Euclidean_distance).
    fn distance(&self, other: &[f32; D]) -> f32;
}

impl<const D: usize> VectorOps<D> for [f32; D] {
    fn dot_product(&self, other: &[f32; D]) -> f32 {
        izip!(self, other).fold(0.0, |acc, (first, second)| acc + first * second)
    }

    fn translate(&self, offset: &[f32; D]) -> [f32; D] {
        let mut result = *self;
        for (result, offset) in izip!(&mut result, offset) {
            *result += offset;
        }
        result
    }

    fn difference(&self, other: &[f32; D]) -> [f32; D] {
        let mut result = *self;
        for (result, other) in izip!(&mut result, other) {
            *result -= other;
        }
        result
    }

    fn scale(&self, factor: f32) -> [f32; D] {
        self.map(|val| val * factor)
    }

    fn distance(&self, other: &[f32; D]) -> f32 {
        let d = self.difference(other);
        d.dot_product(&d).sqrt()
    }
}

pub trait VectorRotate<const D: usize> {
    /// Rotate counterclockwise by `angle` (radians).
    fn rotate(&self, angle: f32) -> [f32; D];
}

impl VectorRotate<2> for [f32; 2] {
    fn rotate(&self, angle: f32) -> [f32; 2] {
        let (sin_a, cos_a) = angle.sin_cos();
        [
            self[0] * cos_a - self[1] * sin_a,
            self[0] * sin_a + self[1] * cos_a,
        ]
    }
}
