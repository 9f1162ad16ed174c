//! Implements a simple spin-lock based mutex.
//!
//! The kernel runs on a single CPU without interrupts, so the lock is only
//! ever contended when a panic fires while the lock is held. `try_lock`
//! exists for exactly that situation.

#![cfg_attr(not(test), no_std)]

use core::cell::UnsafeCell;
use core::hint;
use core::ops::{Deref, DerefMut};
use core::sync::atomic::{AtomicBool, Ordering};

pub struct Mutex<T> {
    guarded_value: UnsafeCell<T>,
    locked: AtomicBool,
}

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Mutex<T> {
        Mutex {
            guarded_value: UnsafeCell::new(value),
            locked: AtomicBool::new(false),
        }
    }

    /// Spin until the lock is acquired.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        loop {
            if let Some(guard) = self.try_lock() {
                return guard;
            }
            while self.locked.load(Ordering::Relaxed) {
                hint::spin_loop();
            }
        }
    }

    /// Acquire the lock if it is currently free.
    pub fn try_lock(&self) -> Option<MutexGuard<'_, T>> {
        match self.locked.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed) {
            Ok(_) => Some(MutexGuard { mutex: self }),
            Err(_) => None,
        }
    }

    /// Whether some guard currently holds the lock.
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}

unsafe impl<T: Send> Send for Mutex<T> {}
unsafe impl<T: Send> Sync for Mutex<T> {}

pub struct MutexGuard<'a, T> {
    mutex: &'a Mutex<T>,
}

impl<'a, T> Deref for MutexGuard<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        unsafe { &*self.mutex.guarded_value.get() }
    }
}

impl<'a, T> DerefMut for MutexGuard<'a, T> {
    fn deref_mut(&mut self) -> &mut T {
        unsafe { &mut *self.mutex.guarded_value.get() }
    }
}

impl<'a, T> Drop for MutexGuard<'a, T> {
    fn drop(&mut self) {
        self.mutex.locked.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod test {
    use super::Mutex;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_try_lock() {
        let mutex = Mutex::new(0_u32);

        {
            let guard = mutex.try_lock();
            assert!(guard.is_some(), "Unlocked mutex must be lockable");
            assert!(mutex.is_locked());
        }

        // the guard above went out of scope
        {
            let guard = mutex.try_lock();
            assert!(guard.is_some(), "Mutex should have been unlocked by guard");

            let guard2 = mutex.try_lock();
            assert!(guard2.is_none(), "Mutex acquired twice");
        }
        assert!(!mutex.is_locked());
    }

    #[test]
    fn test_guard_mutation() {
        let mutex = Mutex::new(1_u32);
        *mutex.lock() += 41;
        assert_eq!(*mutex.lock(), 42);
    }

    #[test]
    fn test_contended_increments() {
        let mutex = Arc::new(Mutex::new(0_usize));
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let mutex = Arc::clone(&mutex);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        *mutex.lock() += 1;
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }
        assert_eq!(*mutex.lock(), 4000);
    }
}
