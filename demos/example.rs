use swap_container::Container;

fn main() {
    let mut container = Container::new();

    // Adding elements one by one doubles the capacity when full.
    container.add("Hello");
    container.add("world");
    container.add("this");

    // Bulk insertion grows the storage once, to an exact fit.
    container.add_all(vec!["is", "a", "test", "!"]);
    println!("{}", container);

    let last_added = container.last_added_index();
    println!("Last added element index: {}", last_added);

    // Removal moves the last element into the vacated slot.
    container.remove_at(last_added as usize);
    container.remove_element("Hello");
    println!("{}", container);

    if let Ok(i) = usize::try_from(container.find("is")) {
        if let Ok(value) = container.at(i) {
            println!("Object behind {}: \"{}\"", i, value);
        }
    }
}
