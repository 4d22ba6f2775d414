//! Serde support: a matrix is encoded as its rows, `[[a, b], [c, d]]`.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};

use super::Matrix;
use crate::traits::Scalar;

struct RowRef<'a, T, const N: usize>(&'a [T; N]);

impl<T: Serialize, const N: usize> Serialize for RowRef<'_, T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(N)?;
        for v in self.0 {
            tup.serialize_element(v)?;
        }
        tup.end()
    }
}

impl<T: Serialize, const M: usize, const N: usize> Serialize for Matrix<T, M, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(M)?;
        for row in &self.data {
            tup.serialize_element(&RowRef(row))?;
        }
        tup.end()
    }
}

struct Row<T, const N: usize>([T; N]);

struct RowVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Visitor<'de> for RowVisitor<T, N> {
    type Value = Row<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a row of {} numbers", N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut row = [T::zero(); N];
        for (j, slot) in row.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(j, &self))?;
        }
        Ok(Row(row))
    }
}

impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Deserialize<'de> for Row<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, RowVisitor(PhantomData))
    }
}

struct MatrixVisitor<T, const M: usize, const N: usize>(PhantomData<T>);

impl<'de, T: Scalar + Deserialize<'de>, const M: usize, const N: usize> Visitor<'de>
    for MatrixVisitor<T, M, N>
{
    type Value = Matrix<T, M, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} rows of {} numbers", M, N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = Matrix::<T, M, N>::zeros();
        for (i, slot) in out.data.iter_mut().enumerate() {
            let row: Row<T, N> = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
            *slot = row.0;
        }
        Ok(out)
    }
}

impl<'de, T: Scalar + Deserialize<'de>, const M: usize, const N: usize> Deserialize<'de>
    for Matrix<T, M, N>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(M, MatrixVisitor(PhantomData))
    }
}
