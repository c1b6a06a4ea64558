use std::fmt::Display;

use linked_collections::{Bag, Container, EmptyError, Queue, Stack};

fn report<C: Container + Display>(label: &str, container: &C) {
    println!("count {}", container.count());
    println!("{label} {container}");
}

fn main() -> Result<(), EmptyError> {
    println!("Bag");
    let mut bag = Bag::new();
    for item in [10, 1, 8, 7, 6, 5] {
        bag.add(item);
    }
    println!("count {}", bag.count());
    for item in &bag {
        println!("{item}");
    }
    println!("bag {bag}");

    println!("\nStack");
    let mut stack: Stack<i32> = (1..=6).collect();
    report("stack", &stack);

    match stack.peek() {
        Some(top) => println!("peek {top}"),
        None => println!("stack is empty."),
    }
    report("stack", &stack);

    while !stack.is_empty() {
        println!("pop {}", stack.try_pop()?);
    }
    report("stack", &stack);

    stack.push(100);
    report("stack", &stack);

    println!("\nQueue");
    let mut queue: Queue<i32> = (1..=6).collect();
    report("queue", &queue);

    println!("dequeue {}", queue.try_dequeue()?);
    report("queue", &queue);

    queue.enqueue(50);
    println!("peek {}", queue.try_peek()?);
    report("queue", &queue);

    Ok(())
}
