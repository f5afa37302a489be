//! Common Go source fixtures for tests.

/// Package `foo` importing `fmt` and `os`, declaring `main` then `helper`.
pub const SCENARIO: &str = r#"package foo

import (
	"fmt"
	"os"
)

func main() {
	fmt.Println(os.Args)
}

func helper() {}
"#;

/// Every declaration form the index understands.
pub const SHAPES: &str = r#"package shapes

import (
	"fmt"
	m "math"
	. "strings"
	_ "embed"
)

import "os"

const Pi = 3.14

const (
	A, B = 1, 2
	C    = "c"
)

var (
	registry = map[string]Shape{}
	x, y     int
)

var counter int

type Shape interface {
	Area() float64
}

type (
	Circle struct{ R float64 }
	Square struct {
		Side float64
	}
)

func NewCircle(r float64) *Circle { return &Circle{R: r} }

func (c *Circle) Area() float64 { return m.Pi * c.R * c.R }

func (s Square) Area() float64 { return s.Side * s.Side }

func Map[T any](xs []T, f func(T) T) []T {
	for i := range xs {
		xs[i] = f(xs[i])
	}
	return xs
}
"#;

pub const HELPER_THEN_MAIN: &str = r#"package main

func helper() {}

func main() {
	helper()
}
"#;

pub const NO_MAIN: &str = r#"package tools

func Run() {}

func mainly() {}
"#;

pub const NO_PACKAGE: &str = r#"func orphan() {}
"#;

/// Junk between declarations; the parser wraps it in a placeholder.
pub const WITH_JUNK: &str = r#"package broken

func before() {}

@@ ?? @@

func after() {}

var v = 1
"#;
