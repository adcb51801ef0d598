//! Whole-program checking tests

use minic_frontend::ast::*;
use minic_frontend::{typecheck_program, Type, TypeError};

/// void foo() { body }
fn void_function(body: Statement) -> FunctionDefinition {
    FunctionDefinition::new(Type::Void, "foo", vec![], body)
}

fn only_function(def: FunctionDefinition) -> Program {
    Program::new(vec![], vec![def])
}

fn stmts(first: Statement, rest: impl IntoIterator<Item = Statement>) -> Statement {
    Statement::sequence(first, rest)
}

/// Foo { int x; char y; }
fn foo_structure() -> StructureDeclaration {
    StructureDeclaration::new(
        "Foo",
        vec![
            VariableDeclaration::new(Type::Int, "x"),
            VariableDeclaration::new(Type::Char, "y"),
        ],
    )
}

/// int blah(int x, char y) { return 7; }
fn blah_function() -> FunctionDefinition {
    FunctionDefinition::new(
        Type::Int,
        "blah",
        vec![
            VariableDeclaration::new(Type::Int, "x"),
            VariableDeclaration::new(Type::Char, "y"),
        ],
        Statement::ret(Expression::int(7)),
    )
}

fn make_foo(arguments: Vec<Expression>) -> Expression {
    Expression::make_structure("Foo", arguments)
}

fn with_foo(body: Statement) -> Program {
    Program::new(vec![foo_structure()], vec![void_function(body)])
}

fn with_blah(call_arguments: Vec<Expression>) -> Program {
    let foo = void_function(Statement::expression(Expression::call("blah", call_arguments)));
    Program::new(vec![], vec![blah_function(), foo])
}

#[test]
fn test_variable_definition_and_use() {
    // int x = 0; int y = x;
    let body = stmts(
        Statement::declare(Type::Int, "x", Expression::int(0)),
        [Statement::declare(Type::Int, "y", Expression::var("x"))],
    );
    assert_eq!(typecheck_program(&only_function(void_function(body))), Ok(()));
}

#[test]
fn test_access_undeclared_variable() {
    // int x = x;
    let body = Statement::declare(Type::Int, "x", Expression::var("x"));
    assert_eq!(
        typecheck_program(&only_function(void_function(body))),
        Err(TypeError::UnboundVariable { name: "x".into() })
    );
}

#[test]
fn test_pointer_to_variable() {
    // int x = 0; int* y = &x;
    let body = stmts(
        Statement::declare(Type::Int, "x", Expression::int(0)),
        [Statement::declare(
            Type::pointer_to(Type::Int),
            "y",
            Expression::address_of(Lhs::var("x")),
        )],
    );
    assert!(typecheck_program(&only_function(void_function(body))).is_ok());
}

#[test]
fn test_add_pointer() {
    // int x = 0; int* y = &x; int* z = y + 3;
    let body = stmts(
        Statement::declare(Type::Int, "x", Expression::int(0)),
        [
            Statement::declare(
                Type::pointer_to(Type::Int),
                "y",
                Expression::address_of(Lhs::var("x")),
            ),
            Statement::declare(
                Type::pointer_to(Type::Int),
                "z",
                Expression::binary(Expression::var("y"), BinaryOp::Add, Expression::int(3)),
            ),
        ],
    );
    assert!(typecheck_program(&only_function(void_function(body))).is_ok());
}

#[test]
fn test_normal_structure_creation() {
    // Foo f = Foo(7, 'a');
    let body = Statement::declare(
        Type::structure("Foo"),
        "f",
        make_foo(vec![Expression::int(7), Expression::char('a')]),
    );
    assert!(typecheck_program(&with_foo(body)).is_ok());
}

#[test]
fn test_structure_duplicate_fields() {
    let decl = StructureDeclaration::new(
        "Foo",
        vec![
            VariableDeclaration::new(Type::Int, "x"),
            VariableDeclaration::new(Type::Char, "x"),
        ],
    );
    assert!(matches!(
        typecheck_program(&Program::new(vec![decl], vec![])),
        Err(TypeError::DuplicateFieldName { .. })
    ));
}

#[test]
fn test_structure_creation_too_many_params() {
    let body = Statement::declare(
        Type::structure("Foo"),
        "f",
        make_foo(vec![Expression::int(7), Expression::char('a'), Expression::char('b')]),
    );
    assert!(matches!(
        typecheck_program(&with_foo(body)),
        Err(TypeError::ArityMismatch { expected: 2, found: 3, .. })
    ));
}

#[test]
fn test_structure_creation_wrong_param_types() {
    let body = Statement::declare(
        Type::structure("Foo"),
        "f",
        make_foo(vec![Expression::char('a'), Expression::int(7)]),
    );
    assert!(matches!(
        typecheck_program(&with_foo(body)),
        Err(TypeError::TypeMismatch { .. })
    ));
}

#[test]
fn test_normal_structure_access() {
    // Foo f = Foo(7, 'a'); int g = f.x;
    let body = stmts(
        Statement::declare(
            Type::structure("Foo"),
            "f",
            make_foo(vec![Expression::int(7), Expression::char('a')]),
        ),
        [Statement::declare(Type::Int, "g", Expression::field(Expression::var("f"), "x"))],
    );
    assert!(typecheck_program(&with_foo(body)).is_ok());
}

#[test]
fn test_structure_access_nonexistent_field() {
    // Foo f = Foo(7, 'a'); int g = f.z;
    let body = stmts(
        Statement::declare(
            Type::structure("Foo"),
            "f",
            make_foo(vec![Expression::int(7), Expression::char('a')]),
        ),
        [Statement::declare(Type::Int, "g", Expression::field(Expression::var("f"), "z"))],
    );
    assert!(matches!(
        typecheck_program(&with_foo(body)),
        Err(TypeError::UnknownField { .. })
    ));
}

#[test]
fn test_normal_structure_pointer_to_field() {
    // Foo f = Foo(7, 'a'); int* g = &f.x;
    let body = stmts(
        Statement::declare(
            Type::structure("Foo"),
            "f",
            make_foo(vec![Expression::int(7), Expression::char('a')]),
        ),
        [Statement::declare(
            Type::pointer_to(Type::Int),
            "g",
            Expression::address_of(Lhs::field(Lhs::var("f"), "x")),
        )],
    );
    assert!(typecheck_program(&with_foo(body)).is_ok());
}

#[test]
fn test_assignment_through_lhs() {
    // Foo f = Foo(7, 'a'); Foo* p = &f; (*p).x = 3; f.y = 'b';
    let body = stmts(
        Statement::declare(
            Type::structure("Foo"),
            "f",
            make_foo(vec![Expression::int(7), Expression::char('a')]),
        ),
        [
            Statement::declare(
                Type::pointer_to(Type::structure("Foo")),
                "p",
                Expression::address_of(Lhs::var("f")),
            ),
            Statement::assign(Lhs::field(Lhs::deref(Lhs::var("p")), "x"), Expression::int(3)),
            Statement::assign(Lhs::field(Lhs::var("f"), "y"), Expression::char('b')),
        ],
    );
    assert!(typecheck_program(&with_foo(body)).is_ok());
}

#[test]
fn test_assignment_type_mismatch() {
    let body = stmts(
        Statement::declare(Type::Int, "x", Expression::int(0)),
        [Statement::assign(Lhs::var("x"), Expression::bool(true))],
    );
    assert_eq!(
        typecheck_program(&only_function(void_function(body))),
        Err(TypeError::TypeMismatch {
            expected: Type::Int,
            found: Type::Bool,
        })
    );
}

#[test]
fn test_normal_function_call() {
    let program = with_blah(vec![Expression::int(7), Expression::char('a')]);
    assert!(typecheck_program(&program).is_ok());
}

#[test]
fn test_function_call_not_enough_params() {
    assert!(matches!(
        typecheck_program(&with_blah(vec![Expression::int(7)])),
        Err(TypeError::ArityMismatch { expected: 2, found: 1, .. })
    ));
}

#[test]
fn test_function_call_too_many_params() {
    let program = with_blah(vec![Expression::int(7), Expression::char('a'), Expression::bool(true)]);
    assert!(matches!(
        typecheck_program(&program),
        Err(TypeError::ArityMismatch { expected: 2, found: 3, .. })
    ));
}

#[test]
fn test_function_call_wrong_types() {
    let program = with_blah(vec![Expression::char('a'), Expression::int(7)]);
    assert!(matches!(
        typecheck_program(&program),
        Err(TypeError::TypeMismatch { .. })
    ));
}

#[test]
fn test_function_call_nonexistent() {
    let foo = void_function(Statement::expression(Expression::call(
        "blah",
        vec![Expression::int(7), Expression::char('a')],
    )));
    assert!(matches!(
        typecheck_program(&only_function(foo)),
        Err(TypeError::UnknownFunction { .. })
    ));
}

#[test]
fn test_forward_references_resolve() {
    // void foo() { Node n = Node(blah(1, 'c')); }  declared before Node and blah
    let foo = void_function(Statement::declare(
        Type::structure("Node"),
        "n",
        Expression::make_structure(
            "Node",
            vec![Expression::call("blah", vec![Expression::int(1), Expression::char('c')])],
        ),
    ));
    let node = StructureDeclaration::new("Node", vec![VariableDeclaration::new(Type::Int, "value")]);
    let program = Program::new(vec![node], vec![foo, blah_function()]);
    assert!(typecheck_program(&program).is_ok());
}

#[test]
fn test_recursive_structure_through_pointer() {
    // List { int head; List* tail; }
    let list = StructureDeclaration::new(
        "List",
        vec![
            VariableDeclaration::new(Type::Int, "head"),
            VariableDeclaration::new(Type::pointer_to(Type::structure("List")), "tail"),
        ],
    );
    // int second(List* l) { return (*(*l).tail).head; }
    let second = FunctionDefinition::new(
        Type::Int,
        "second",
        vec![VariableDeclaration::new(Type::pointer_to(Type::structure("List")), "l")],
        Statement::ret(Expression::field(
            Expression::deref(Expression::field(Expression::deref(Expression::var("l")), "tail")),
            "head",
        )),
    );
    assert!(typecheck_program(&Program::new(vec![list], vec![second])).is_ok());
}

#[test]
fn test_if_normal() {
    let foo = void_function(Statement::if_else(
        Expression::bool(true),
        Statement::ReturnVoid,
        Statement::ReturnVoid,
    ));
    assert!(typecheck_program(&only_function(foo)).is_ok());
}

#[test]
fn test_if_both_branches_return_value() {
    let f = FunctionDefinition::new(
        Type::Int,
        "f",
        vec![],
        Statement::if_else(
            Expression::bool(true),
            Statement::ret(Expression::int(1)),
            Statement::ret(Expression::int(2)),
        ),
    );
    assert!(typecheck_program(&only_function(f)).is_ok());
}

#[test]
fn test_if_one_branch_returns_is_missing_return() {
    let f = FunctionDefinition::new(
        Type::Int,
        "f",
        vec![],
        Statement::if_else(
            Expression::bool(true),
            Statement::ret(Expression::int(1)),
            Statement::expression(Expression::int(1)),
        ),
    );
    assert_eq!(
        typecheck_program(&only_function(f)),
        Err(TypeError::MissingReturn {
            function: "f".into(),
            return_type: Type::Int,
        })
    );
}

#[test]
fn test_loop_that_always_returns_still_missing_return() {
    let f = FunctionDefinition::new(
        Type::Int,
        "f",
        vec![],
        Statement::while_loop(Expression::bool(true), Statement::ret(Expression::int(1))),
    );
    assert!(matches!(
        typecheck_program(&only_function(f)),
        Err(TypeError::MissingReturn { .. })
    ));
}

#[test]
fn test_break_inside_loop() {
    let foo = void_function(Statement::while_loop(Expression::bool(true), Statement::Break));
    assert!(typecheck_program(&only_function(foo)).is_ok());
}

#[test]
fn test_break_at_top_level() {
    let foo = void_function(Statement::Break);
    assert_eq!(
        typecheck_program(&only_function(foo)),
        Err(TypeError::BreakOutsideLoop)
    );
}

#[test]
fn test_continue_in_nested_if_inside_loop() {
    // while (x < 10) { if (x == 5) { continue; } else { x = x + 1; } }
    let body = stmts(
        Statement::declare(Type::Int, "x", Expression::int(0)),
        [Statement::while_loop(
            Expression::binary(Expression::var("x"), BinaryOp::Less, Expression::int(10)),
            Statement::if_else(
                Expression::binary(Expression::var("x"), BinaryOp::Equal, Expression::int(5)),
                Statement::Continue,
                Statement::assign(
                    Lhs::var("x"),
                    Expression::binary(Expression::var("x"), BinaryOp::Add, Expression::int(1)),
                ),
            ),
        )],
    );
    assert!(typecheck_program(&only_function(void_function(body))).is_ok());
}

#[test]
fn test_continue_at_top_level() {
    assert_eq!(
        typecheck_program(&only_function(void_function(Statement::Continue))),
        Err(TypeError::ContinueOutsideLoop)
    );
}

#[test]
fn test_return_return_is_unreachable() {
    let foo = void_function(stmts(Statement::ReturnVoid, [Statement::ReturnVoid]));
    assert_eq!(
        typecheck_program(&only_function(foo)),
        Err(TypeError::UnreachableCode)
    );
}

#[test]
fn test_code_after_returning_if_is_unreachable() {
    let foo = void_function(stmts(
        Statement::if_else(Expression::bool(true), Statement::ReturnVoid, Statement::ReturnVoid),
        [Statement::expression(Expression::int(0))],
    ));
    assert_eq!(
        typecheck_program(&only_function(foo)),
        Err(TypeError::UnreachableCode)
    );
}

#[test]
fn test_duplicate_structure_names() {
    let program = Program::new(vec![foo_structure(), foo_structure()], vec![]);
    assert!(matches!(
        typecheck_program(&program),
        Err(TypeError::DuplicateStructureName { .. })
    ));
}

#[test]
fn test_duplicate_function_names_regardless_of_order() {
    let other = void_function(Statement::ReturnVoid);
    let program = Program::new(vec![], vec![blah_function(), other, blah_function()]);
    assert!(matches!(
        typecheck_program(&program),
        Err(TypeError::DuplicateFunctionName { .. })
    ));
}

#[test]
fn test_declaration_errors_win_over_body_errors() {
    // The broken body would fail too, but tables are built first
    let broken = void_function(Statement::Break);
    let program = Program::new(vec![foo_structure(), foo_structure()], vec![broken]);
    assert!(matches!(
        typecheck_program(&program),
        Err(TypeError::DuplicateStructureName { .. })
    ));
}

#[test]
fn test_malloc_then_free() {
    // void* p = malloc(1); free(p);
    let body = stmts(
        Statement::declare(Type::void_pointer(), "p", Expression::malloc(Expression::int(1))),
        [Statement::free(Expression::var("p"))],
    );
    assert!(typecheck_program(&only_function(void_function(body))).is_ok());
}

#[test]
fn test_free_int_is_type_mismatch() {
    // int p = 1; free(p);
    let body = stmts(
        Statement::declare(Type::Int, "p", Expression::int(1)),
        [Statement::free(Expression::var("p"))],
    );
    assert_eq!(
        typecheck_program(&only_function(void_function(body))),
        Err(TypeError::TypeMismatch {
            expected: Type::void_pointer(),
            found: Type::Int,
        })
    );
}

#[test]
fn test_free_expression_form_matches_statement_form() {
    let ok = stmts(
        Statement::declare(Type::void_pointer(), "p", Expression::malloc(Expression::int(1))),
        [Statement::expression(Expression::free(Expression::var("p")))],
    );
    assert!(typecheck_program(&only_function(void_function(ok))).is_ok());

    let bad = stmts(
        Statement::declare(Type::pointer_to(Type::Int), "p", Expression::cast(
            Type::pointer_to(Type::Int),
            Expression::malloc(Expression::int(1)),
        )),
        [Statement::expression(Expression::free(Expression::var("p")))],
    );
    assert!(matches!(
        typecheck_program(&only_function(void_function(bad))),
        Err(TypeError::TypeMismatch { .. })
    ));
}

#[test]
fn test_return_free_in_void_function() {
    // free(e) has type void, so it may be returned from a void function
    let f = FunctionDefinition::new(
        Type::Void,
        "release",
        vec![VariableDeclaration::new(Type::void_pointer(), "p")],
        Statement::ret(Expression::free(Expression::var("p"))),
    );
    assert!(typecheck_program(&only_function(f)).is_ok());
}

#[test]
fn test_shadowing_later_declaration_wins() {
    // int x = 1; char x = 'c'; char y = x;
    let body = stmts(
        Statement::declare(Type::Int, "x", Expression::int(1)),
        [
            Statement::declare(Type::Char, "x", Expression::char('c')),
            Statement::declare(Type::Char, "y", Expression::var("x")),
        ],
    );
    assert!(typecheck_program(&only_function(void_function(body))).is_ok());
}
