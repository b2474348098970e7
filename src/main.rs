use dynarray::collections::contiguous::DynArray;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prints the elements of `arr` on one line, separated by spaces. Takes the DynArray by value, so
/// callers hand over a clone.
fn print_array(arr: DynArray<i32>) {
    println!("{arr}");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("filling");
    let mut arr = DynArray::new();
    for i in 0..10 {
        arr.push_back(i);
    }
    print_array(arr.clone());

    info!("inserting");
    arr.insert(0, 13);
    arr.insert(arr.len(), 14);
    arr.insert(3, 15);
    print_array(arr.clone());

    info!("erasing");
    arr.erase(0);
    print_array(arr.clone());

    info!("updating");
    for i in 0..arr.len() {
        arr[i] += 1;
    }
    print_array(arr.clone());

    info!(len = arr.len(), cap = arr.cap(), "done");
}
