//! Integration tests for scope-bound release of pointer tables.
//!
//! Models the unpacker pattern the guard exists for: a loop acquires section buffers one by one
//! and bails out half-way; whatever was acquired so far must be released exactly once.

use std::{cell::Cell, ptr, rc::Rc};

use endiscope::{
    tagged::BE32,
    utils::{atomic_exchange, ArrayRelease, ObjectRelease, RawAlloc, RawRelease, ReleaseGuard},
    Error, Result,
};

struct Section {
    live: Rc<Cell<usize>>,
    data: Vec<u8>,
}

impl Section {
    fn new(live: &Rc<Cell<usize>>, size: usize) -> Self {
        live.set(live.get() + 1);
        Self {
            live: Rc::clone(live),
            data: vec![0; size],
        }
    }
}

impl Drop for Section {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

fn load_sections(
    slots: &mut [*mut Section],
    live: &Rc<Cell<usize>>,
    sizes: &[usize],
) -> Result<usize> {
    let mut guard = ReleaseGuard::<Section, ObjectRelease>::new(slots);
    for &size in sizes {
        if size == 0 {
            return Err(Error::OutOfBounds);
        }
        guard.try_push(Box::new(Section::new(live, size)))?;
    }
    let total = (0..guard.count())
        .filter_map(|i| guard.get(i))
        .map(|s| s.data.len())
        .sum();
    Ok(total)
}

#[test]
fn early_return_releases_acquired_sections() {
    let live = Rc::new(Cell::new(0));
    let mut slots = [ptr::null_mut::<Section>(); 8];

    let result = load_sections(&mut slots, &live, &[0x200, 0x400, 0, 0x100]);
    assert!(matches!(result, Err(Error::OutOfBounds)));
    assert_eq!(live.get(), 0);
    assert!(slots.iter().all(|p| p.is_null()));
}

#[test]
fn successful_run_releases_at_scope_exit() -> Result<()> {
    let live = Rc::new(Cell::new(0));
    let mut slots = [ptr::null_mut::<Section>(); 4];

    assert_eq!(load_sections(&mut slots, &live, &[0x10, 0x20, 0x30])?, 0x60);
    assert_eq!(live.get(), 0);
    Ok(())
}

#[test]
fn overflowing_the_table_is_an_error_not_a_leak() {
    let live = Rc::new(Cell::new(0));
    let mut slots = [ptr::null_mut::<Section>(); 2];

    let result = load_sections(&mut slots, &live, &[1, 2, 3]);
    assert!(matches!(result, Err(Error::Malformed { .. })));
    assert_eq!(live.get(), 0);
}

#[test]
fn unpopulated_slot_is_left_alone() {
    let live = Rc::new(Cell::new(0));
    let mut outsider = Section::new(&live, 1);
    let sentinel: *mut Section = &mut outsider;
    let mut slots = [ptr::null_mut(), ptr::null_mut(), sentinel];
    {
        let mut guard = ReleaseGuard::<Section, ObjectRelease>::new(&mut slots);
        guard.push(Box::new(Section::new(&live, 2)));
        guard.push(Box::new(Section::new(&live, 3)));
        assert_eq!(live.get(), 3);
    }
    assert!(slots[0].is_null() && slots[1].is_null());
    assert!(ptr::eq(slots[2], sentinel));
    assert_eq!(live.get(), 1);
}

#[test]
fn array_and_raw_strategies() {
    let mut tables = [ptr::null_mut::<u32>(); 2];
    {
        let mut guard = ReleaseGuard::<u32, ArrayRelease>::new(&mut tables);
        guard.push(vec![7u32; 16].into_boxed_slice());
        assert_eq!(guard.get(0), Some(&7));
        assert_eq!(guard.get_array(0).map(<[u32]>::len), Some(16));
    }
    assert!(tables[0].is_null());

    let mut raw = [ptr::null_mut::<u64>(); 3];
    {
        let mut guard = ReleaseGuard::<u64, RawRelease>::new(&mut raw);
        guard.push(RawAlloc::new(0xdead_beef));
        guard.push(RawAlloc::new(42));
        assert_eq!(guard.get(1), Some(&42));
        guard.release_all();
        assert_eq!(guard.count(), 0);
        assert_eq!(guard.slot(0), Some(ptr::null_mut()));
    }
}

#[test]
fn relocation_tables_of_different_lengths() {
    let mut slots = [ptr::null_mut::<BE32>(); 3];
    {
        let mut guard = ReleaseGuard::<BE32, ArrayRelease>::new(&mut slots);
        for i in 0..2u32 {
            let table: Vec<BE32> = (0..=i).map(|n| BE32::new(0x1000 + n)).collect();
            guard.push(table.into_boxed_slice());
        }
        assert_eq!(guard.count(), 2);
        assert_eq!(guard.get_array(0).map(<[BE32]>::len), Some(1));
        assert_eq!(
            guard.get_array(1),
            Some(&[BE32::new(0x1000), BE32::new(0x1001)][..])
        );
    }
    assert!(slots.iter().all(|p| p.is_null()));
}

#[test]
fn arrays_release_every_element_once() {
    let live = Rc::new(Cell::new(0));
    let mut slots = [ptr::null_mut::<Section>(); 3];
    {
        let mut guard = ReleaseGuard::<Section, ArrayRelease>::new(&mut slots);
        for i in 0..2 {
            let sections: Vec<Section> = (0..=i).map(|n| Section::new(&live, n + 1)).collect();
            guard.push(sections.into_boxed_slice());
        }
        assert_eq!(live.get(), 3);
    }
    assert_eq!(live.get(), 0);
    assert!(slots[0].is_null() && slots[1].is_null());
    assert!(slots[2].is_null());
}

#[test]
fn atomic_exchange_returns_previous_value() {
    let mut counter = 5usize;
    assert_eq!(atomic_exchange(&mut counter, 9), 5);
    assert_eq!(counter, 9);

    let mut value = 3u32;
    let mut slot: *mut u32 = &mut value;
    let previous = atomic_exchange(&mut slot, ptr::null_mut());
    assert!(slot.is_null());
    assert!(ptr::eq(previous, &value));
}
