// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    fmt,
    hash::Hash,
    marker::PhantomData,
    ops::Deref,
    path::PathBuf,
    rc::Rc,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use parking_lot::{Mutex, RwLock};
use tracing::trace;

use crate::key::ArgList;

/// A value that can be stored by [`PrimitiveMemo`].
///
/// Values reporting [`is_absent`](CacheValue::is_absent) are never treated as
/// a cache hit: `None` and `Err(_)` results are recomputed on every call.
///
/// Implemented for the std value types, tuples of up to eight `Clone`
/// elements and `'static` references. Any other `Clone` type can be returned
/// wrapped in [`Cached`].
pub trait CacheValue: Clone {
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T: Clone> CacheValue for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: Clone, E: Clone> CacheValue for Result<T, E> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_err()
    }
}

macro_rules! impl_present_value {
    ($($ty:ty),* $(,)?) => {
        $(impl CacheValue for $ty {})*
    };
}

impl_present_value!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    PathBuf,
    std::time::Duration,
);

impl<T: ?Sized> CacheValue for &'static T {}
impl<T: ?Sized> CacheValue for Box<T> where Box<T>: Clone {}
impl<T: ?Sized> CacheValue for Arc<T> {}
impl<T: ?Sized> CacheValue for Rc<T> {}
impl<B: ToOwned + ?Sized + 'static> CacheValue for Cow<'static, B> {}
impl<T: Clone> CacheValue for Vec<T> {}
impl<T: Clone> CacheValue for VecDeque<T> {}
impl<T: Clone> CacheValue for BTreeSet<T> {}
impl<K: Clone, V: Clone> CacheValue for BTreeMap<K, V> {}
impl<T: Clone + Eq + Hash, S: Clone> CacheValue for HashSet<T, S> {}
impl<K: Clone + Eq + Hash, V: Clone, S: Clone> CacheValue for HashMap<K, V, S> {}

macro_rules! impl_tuple_value {
    ($($ty:ident),+) => {
        impl<$($ty: Clone),+> CacheValue for ($($ty,)+) {}
    };
}

impl_tuple_value!(A);
impl_tuple_value!(A, B);
impl_tuple_value!(A, B, C);
impl_tuple_value!(A, B, C, D);
impl_tuple_value!(A, B, C, D, E);
impl_tuple_value!(A, B, C, D, E, F);
impl_tuple_value!(A, B, C, D, E, F, G);
impl_tuple_value!(A, B, C, D, E, F, G, H);

/// Wrapper memoizing any `Clone` value as always present.
///
/// ```
/// use std::net::Ipv4Addr;
/// use tzguard_memo::{primitive_memo, Cached};
///
/// let parse = primitive_memo(|text: &str| Cached(text.parse::<Ipv4Addr>().ok()));
/// assert_eq!(*parse.call(("127.0.0.1",)), Some(Ipv4Addr::LOCALHOST));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cached<T>(pub T);

impl<T> Cached<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Cached<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: Clone> CacheValue for Cached<T> {}

/// A function callable with an argument tuple.
///
/// Implemented for every `Fn` of up to eight arguments, so closures and
/// function items (or references to them) can be memoized directly.
pub trait MemoFn<Args> {
    type Output;

    fn invoke(&self, args: Args) -> Self::Output;
}

impl<Func, R> MemoFn<()> for Func
where
    Func: Fn() -> R,
{
    type Output = R;

    #[inline]
    fn invoke(&self, _args: ()) -> R {
        self()
    }
}

macro_rules! impl_memo_fn {
    ($($arg:ident),+) => {
        impl<Func, R, $($arg),+> MemoFn<($($arg,)+)> for Func
        where
            Func: Fn($($arg),+) -> R,
        {
            type Output = R;

            #[inline]
            #[allow(non_snake_case)]
            fn invoke(&self, ($($arg,)+): ($($arg,)+)) -> R {
                self($($arg),+)
            }
        }
    };
}

impl_memo_fn!(A);
impl_memo_fn!(A, B);
impl_memo_fn!(A, B, C);
impl_memo_fn!(A, B, C, D);
impl_memo_fn!(A, B, C, D, E);
impl_memo_fn!(A, B, C, D, E, F);
impl_memo_fn!(A, B, C, D, E, F, G);
impl_memo_fn!(A, B, C, D, E, F, G, H);

type Slot<R> = Arc<Mutex<Option<R>>>;

/// Memoizing wrapper around a deterministic function of primitive arguments.
///
/// The wrapped function runs at most once per distinct cache key (see
/// [`crate::key`]) for as long as the memo lives. Present values are never
/// evicted, so the memo suits bounded input domains only. Keys whose call
/// returned an absent value are dropped again, while a key whose call panicked
/// keeps an empty slot until it is called again.
///
/// Lookups are atomic per key: concurrent first calls with the same key wait
/// for a single invocation, while calls for different keys proceed in
/// parallel. Calling the memo again with the *same* key from inside the
/// wrapped function deadlocks.
pub struct PrimitiveMemo<F, R> {
    func: F,
    cache: RwLock<HashMap<String, Slot<R>>>,
    cached: AtomicUsize,
    _result: PhantomData<fn() -> R>,
}

/// Wrap `func` in a fresh [`PrimitiveMemo`].
///
/// Pass `&func` to keep using the function directly next to the memo.
pub fn primitive_memo<F, R>(func: F) -> PrimitiveMemo<F, R>
where
    R: CacheValue,
{
    PrimitiveMemo::new(func)
}

impl<F, R> PrimitiveMemo<F, R>
where
    R: CacheValue,
{
    pub fn new(func: F) -> Self {
        Self {
            func,
            cache: RwLock::new(HashMap::new()),
            cached: AtomicUsize::new(0),
            _result: PhantomData,
        }
    }

    /// Call the wrapped function, or return the value cached for `args`.
    pub fn call<Args>(&self, args: Args) -> R
    where
        Args: ArgList,
        F: MemoFn<Args, Output = R>,
    {
        let key = args.cache_key();
        loop {
            let slot = self.slot(key.as_str());

            let mut entry = slot.lock();
            if let Some(hit) = entry.as_ref() {
                trace!(key = %key, "memo hit");
                return hit.clone();
            }
            // The slot was dropped by a caller that got an absent result
            if !self.is_current(key.as_str(), &slot) {
                continue;
            }

            trace!(key = %key, "memo miss");
            let result = self.func.invoke(args);
            if result.is_absent() {
                self.cache.write().remove(key.as_str());
            } else {
                *entry = Some(result.clone());
                self.cached.fetch_add(1, Ordering::Relaxed);
            }
            return result;
        }
    }

    /// Whether a value is cached for `args`.
    pub fn contains<Args: ArgList>(&self, args: &Args) -> bool {
        let key = args.cache_key();
        let slot = self.cache.read().get(&key).cloned();
        slot.is_some_and(|slot| slot.lock().is_some())
    }

    /// The cache key `args` map to.
    pub fn key_for<Args: ArgList>(&self, args: &Args) -> String {
        args.cache_key()
    }

    /// Number of cached values.
    pub fn len(&self) -> usize {
        self.cached.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_current(&self, key: &str, slot: &Slot<R>) -> bool {
        self.cache
            .read()
            .get(key)
            .is_some_and(|current| Arc::ptr_eq(current, slot))
    }

    #[cfg(test)]
    fn slots(&self) -> usize {
        self.cache.read().len()
    }

    fn slot(&self, key: &str) -> Slot<R> {
        if let Some(slot) = self.cache.read().get(key) {
            return slot.clone();
        }
        // Read lock is released above; another caller may have inserted meanwhile.
        self.cache
            .write()
            .entry(key.to_owned())
            .or_insert_with(|| Arc::new(Mutex::new(None)))
            .clone()
    }
}

impl<F, R> fmt::Debug for PrimitiveMemo<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimitiveMemo")
            .field("keys", &self.cache.read().len())
            .field("cached", &self.cached.load(Ordering::Relaxed))
            .finish()
    }
}
