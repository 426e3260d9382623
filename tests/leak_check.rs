// Allocation-balance harness.
//
// "Dropping a table releases all resources" is not observable through the
// API, so this binary installs a counting global
// allocator and checks that a full table lifecycle returns the live-byte
// count to its starting level. Kept to a single #[test] so no concurrent
// test thread allocates while the cycle is measured.
use chained_hashtable::{BasicHashTable, HashTable};
use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicIsize, Ordering};

struct CountingAlloc;

static LIVE_BYTES: AtomicIsize = AtomicIsize::new(0);

// The default realloc/alloc_zeroed route through alloc/dealloc, so counting
// these two covers every path.
unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            LIVE_BYTES.fetch_add(layout.size() as isize, Ordering::SeqCst);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        LIVE_BYTES.fetch_sub(layout.size() as isize, Ordering::SeqCst);
    }
}

#[global_allocator]
static ALLOC: CountingAlloc = CountingAlloc;

fn full_cycle() {
    let mut table = HashTable::new(2).expect("capacity 2 is valid");
    for i in 0..64 {
        table.insert(format!("key_{i}"), format!("value_{i}"));
    }
    // Overwrites drop the replaced entries' strings.
    for i in 0..64 {
        table.insert(format!("key_{i}"), format!("rewritten_{i}"));
    }
    // Removals drop the unlinked entries' strings.
    for i in (0..64).step_by(3) {
        table.remove(&format!("key_{i}")).expect("key was inserted");
    }
    // Resize transfers entries; the old bucket vector drops here.
    let table = table.resize();
    let table = table.resize();
    assert!(!table.is_empty());

    let mut basic = BasicHashTable::new(16).expect("capacity 16 is valid");
    basic.insert("line".to_string(), "Here today...".to_string());
    basic.insert("line".to_string(), "...gone tomorrow".to_string());
    basic.remove("line").expect("line is present");
    // Both tables drop at scope end, releasing every remaining entry.
}

// Test: allocation balance across create/insert/overwrite/remove/resize/drop.
// Assumes: no other thread allocates during the measured window.
// Verifies: live heap bytes after the cycle equal live heap bytes before it —
// nothing the tables allocated outlives them, and nothing is freed twice
// (a double free would underflow the balance, not restore it).
#[test]
fn table_lifecycle_is_allocation_balanced() {
    // Warm-up pass absorbs one-time lazy allocations (test harness state,
    // stdio buffers) so the measured pass sees only table traffic.
    full_cycle();

    let before = LIVE_BYTES.load(Ordering::SeqCst);
    full_cycle();
    let after = LIVE_BYTES.load(Ordering::SeqCst);

    assert_eq!(
        before, after,
        "table lifecycle leaked {} bytes",
        after - before
    );
}
