pub mod todo;

pub use todo::{NewTodo, SaveTodoRequest, Todo, TodoChanges, UpdateTodoRequest, INITIAL_STATUS};
