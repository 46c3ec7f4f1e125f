use std::cmp::Ordering;

use primer::collections::linked::List;
use primer::collections::stack::Stack;
use primer::collections::tree::Tree;

#[derive(Debug)]
struct User {
    id: u32,
    name: &'static str,
}

fn main() {
    println!("\n[List]\n");

    let mut list: List<i32> = (1..=6).collect();
    println!("{list}");

    list.push_front(0);
    println!("after push_front(0): {list}");
    println!("popped: {:?}, {:?}", list.pop_front(), list.pop_back());
    println!("{list}");

    // Strip the even values mid-traversal.
    let mut cursor = list.cursor_front_mut();
    while let Some(value) = cursor.read() {
        if value % 2 == 0 {
            cursor.remove_current();
        }
        cursor.move_next();
    }
    println!("odd values only: {list}");

    println!("\n[Stack]\n");

    let mut stack = Stack::new();
    for word in ["deeply", "nested", "scopes"] {
        stack.push(word);
    }
    println!("{stack:?}");
    println!("top: {:?}", stack.peek());
    while let Some(word) = stack.pop() {
        println!("unwinding: {word}");
    }

    println!("\n[Tree]\n");

    let mut tree: Tree<i32> = [12, 5, 15, 3, 7, 13, 17, 1, 9, 14, 20, 8, 11, 18]
        .into_iter()
        .collect();
    println!("{tree:?}");

    println!("find(&7): {:?}", tree.find(&7));
    println!("remove(&12): {:?} (the root; its successor 13 takes its place)", tree.remove(&12));
    println!("{tree:?}");

    // Remove every multiple of three without restarting the traversal.
    let mut cursor = tree.cursor_mut();
    while let Some(value) = cursor.read() {
        if value % 3 == 0 {
            cursor.remove_current();
        } else {
            cursor.move_next();
        }
    }
    println!("indivisible by three: {tree:?}");

    println!("\n[Tree by key]\n");

    let mut users = Tree::with_comparator(|a: &User, b: &User| a.id.cmp(&b.id));
    users.insert(User { id: 31, name: "ada" });
    users.insert(User { id: 7, name: "grace" });
    users.insert(User { id: 52, name: "edsger" });

    let by_id = |id: &u32, user: &User| -> Ordering { id.cmp(&user.id) };
    println!("find_by id 7: {:?}", users.find_by(&7, by_id));
    println!("find_by id 8: {:?}", users.find_by(&8, by_id));

    for user in &users {
        println!("{} => {}", user.id, user.name);
    }
}
