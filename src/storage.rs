/// Holds one policy object of an [`IndirectValue`](crate::IndirectValue).
///
/// Zero-sized policies take no room: a field of a zero-sized type occupies no bytes, so the
/// storage is as large as the policy it holds, and nothing for [`DefaultCopy`] or
/// [`DefaultDelete`]. Stateful policies are stored inline. Both cases go through the same
/// accessors, so the wrapper never cares which one it has.
///
/// [`DefaultCopy`]: crate::DefaultCopy
/// [`DefaultDelete`]: crate::DefaultDelete
#[repr(transparent)]
pub(crate) struct PolicyStorage<P> {
    policy: P,
}

impl<P> PolicyStorage<P> {
    #[inline]
    pub(crate) const fn new(policy: P) -> Self {
        PolicyStorage { policy }
    }

    #[inline]
    pub(crate) fn from_ref(policy: &P) -> Self
    where
        P: Clone,
    {
        PolicyStorage::new(policy.clone())
    }

    #[inline]
    pub(crate) fn get(&self) -> &P {
        &self.policy
    }

    #[inline]
    pub(crate) fn get_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    #[inline]
    pub(crate) fn into_inner(self) -> P {
        self.policy
    }
}

impl<P: Default> Default for PolicyStorage<P> {
    #[inline]
    fn default() -> Self {
        PolicyStorage::new(P::default())
    }
}

impl<P: Clone> Clone for PolicyStorage<P> {
    #[inline]
    fn clone(&self) -> Self {
        PolicyStorage::from_ref(&self.policy)
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.policy.clone_from(&source.policy);
    }
}
