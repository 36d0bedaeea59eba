//! Descriptor-to-points conversion tests

use shapepoints_core::{
    Circle, Curve, Ellipse, Group, Line, PathShape, Point, Polygon, Polyline, Rect, Shape,
    ShapePoints,
};

fn single(shape: Shape) -> Vec<Point> {
    match shape.to_points().unwrap() {
        ShapePoints::Single(points) => points,
        ShapePoints::Group(_) => panic!("expected a single point sequence"),
    }
}

#[test]
fn test_circle_points() {
    let points = single(Shape::Circle(Circle::new(50.0, 50.0, 20.0)));
    assert_eq!(
        points,
        vec![
            Point::move_to(50.0, 30.0),
            Point::curve_to(50.0, 70.0, Curve::arc(20.0, 20.0)),
            Point::curve_to(50.0, 30.0, Curve::arc(20.0, 20.0)),
        ]
    );
}

#[test]
fn test_ellipse_points() {
    let points = single(Shape::Ellipse(Ellipse::new(100.0, 300.0, 65.0, 120.0)));
    assert_eq!(
        points,
        vec![
            Point::move_to(100.0, 180.0),
            Point::curve_to(100.0, 420.0, Curve::arc(65.0, 120.0)),
            Point::curve_to(100.0, 180.0, Curve::arc(65.0, 120.0)),
        ]
    );
}

#[test]
fn test_line_points() {
    let points = single(Shape::Line(Line::new(10.0, 70.0, 50.0, 200.0)));
    assert_eq!(
        points,
        vec![Point::move_to(10.0, 70.0), Point::new(50.0, 200.0)]
    );
}

#[test]
fn test_path_points() {
    let points = single(Shape::Path(PathShape::new("M20,20h50v20L90,30H50V50l-10,-20z")));
    assert_eq!(
        points,
        vec![
            Point::move_to(20.0, 20.0),
            Point::new(70.0, 20.0),
            Point::new(70.0, 40.0),
            Point::new(90.0, 30.0),
            Point::new(50.0, 30.0),
            Point::new(50.0, 50.0),
            Point::new(40.0, 30.0),
            Point::new(20.0, 20.0),
        ]
    );
}

#[test]
fn test_path_points_with_arcs() {
    let points = single(Shape::Path(PathShape::new(
        "M20,20h50v20A2,2,0,0,1,80,35L90,30H50V50a5,5,45,1,0,-5,-10l-5,-10Z",
    )));
    assert_eq!(
        points,
        vec![
            Point::move_to(20.0, 20.0),
            Point::new(70.0, 20.0),
            Point::new(70.0, 40.0),
            Point::curve_to(80.0, 35.0, Curve::arc_sweep(2.0, 2.0)),
            Point::new(90.0, 30.0),
            Point::new(50.0, 30.0),
            Point::new(50.0, 50.0),
            Point::curve_to(
                45.0,
                40.0,
                Curve::Arc {
                    rx: 5.0,
                    ry: 5.0,
                    x_axis_rotation: 45.0,
                    large_arc_flag: 1,
                    sweep_flag: 0,
                },
            ),
            Point::new(40.0, 30.0),
            Point::new(20.0, 20.0),
        ]
    );
}

#[test]
fn test_path_points_with_cubic_beziers() {
    let points = single(Shape::Path(PathShape::new(
        "M20,20h50v20C70,45,80,40,80,35L90,30H50V50c5,-3,0,-7,-5,-10l-5,-10Z",
    )));
    assert_eq!(
        points[3],
        Point::curve_to(
            80.0,
            35.0,
            Curve::Cubic {
                x1: 70.0,
                y1: 45.0,
                x2: 80.0,
                y2: 40.0
            }
        )
    );
    assert_eq!(
        points[7],
        Point::curve_to(
            45.0,
            40.0,
            Curve::Cubic {
                x1: 55.0,
                y1: 47.0,
                x2: 50.0,
                y2: 43.0
            }
        )
    );
    assert_eq!(points.len(), 10);
}

#[test]
fn test_path_points_with_shorthand_cubic_beziers() {
    let points = single(Shape::Path(PathShape::new("M100,100S175,50,200,100s100,10,100,0")));
    assert_eq!(
        points,
        vec![
            Point::move_to(100.0, 100.0),
            Point::curve_to(
                200.0,
                100.0,
                Curve::Cubic {
                    x1: 125.0,
                    y1: 50.0,
                    x2: 175.0,
                    y2: 50.0
                }
            ),
            Point::curve_to(
                300.0,
                100.0,
                Curve::Cubic {
                    x1: 225.0,
                    y1: 150.0,
                    x2: 300.0,
                    y2: 110.0
                }
            ),
        ]
    );
}

#[test]
fn test_path_points_with_quadratic_beziers() {
    let points = single(Shape::Path(PathShape::new(
        "M20,20h50v20Q70,45,80,35L90,30H50V50q5,-3,-5,-10l-5,-10Z",
    )));
    assert_eq!(
        points[3],
        Point::curve_to(80.0, 35.0, Curve::Quadratic { x1: 70.0, y1: 45.0 })
    );
    assert_eq!(
        points[7],
        Point::curve_to(45.0, 40.0, Curve::Quadratic { x1: 55.0, y1: 47.0 })
    );
}

#[test]
fn test_path_points_with_shorthand_quadratic_beziers() {
    let points = single(Shape::Path(PathShape::new("M300,400Q450,200,600,400T900,500t100,0")));
    assert_eq!(
        points,
        vec![
            Point::move_to(300.0, 400.0),
            Point::curve_to(600.0, 400.0, Curve::Quadratic { x1: 450.0, y1: 200.0 }),
            Point::curve_to(900.0, 500.0, Curve::Quadratic { x1: 750.0, y1: 600.0 }),
            Point::curve_to(1000.0, 500.0, Curve::Quadratic { x1: 1050.0, y1: 400.0 }),
        ]
    );
}

#[test]
fn test_polygon_points() {
    let points = single(Shape::Polygon(Polygon::new("20,30 50,90 20,90 50,30")));
    assert_eq!(
        points,
        vec![
            Point::move_to(20.0, 30.0),
            Point::new(50.0, 90.0),
            Point::new(20.0, 90.0),
            Point::new(50.0, 30.0),
            Point::new(20.0, 30.0),
        ]
    );
}

#[test]
fn test_polyline_points() {
    let points = single(Shape::Polyline(Polyline::new("20,30 50,90 20,90 50,30")));
    assert_eq!(
        points,
        vec![
            Point::move_to(20.0, 30.0),
            Point::new(50.0, 90.0),
            Point::new(20.0, 90.0),
            Point::new(50.0, 30.0),
        ]
    );
}

#[test]
fn test_rect_points() {
    let points = single(Shape::Rect(Rect::new(10.0, 10.0, 50.0, 20.0)));
    assert_eq!(
        points,
        vec![
            Point::move_to(10.0, 10.0),
            Point::new(60.0, 10.0),
            Point::new(60.0, 30.0),
            Point::new(10.0, 30.0),
            Point::new(10.0, 10.0),
        ]
    );
}

#[test]
fn test_rect_points_with_corner_radius() {
    let points = single(Shape::Rect(Rect::rounded(50.0, 50.0, 500.0, 200.0, 5.0, 10.0)));
    assert_eq!(
        points,
        vec![
            Point::move_to(55.0, 50.0),
            Point::new(545.0, 50.0),
            Point::curve_to(550.0, 60.0, Curve::arc_sweep(5.0, 10.0)),
            Point::new(550.0, 240.0),
            Point::curve_to(545.0, 250.0, Curve::arc_sweep(5.0, 10.0)),
            Point::new(55.0, 250.0),
            Point::curve_to(50.0, 240.0, Curve::arc_sweep(5.0, 10.0)),
            Point::new(50.0, 60.0),
            Point::curve_to(55.0, 50.0, Curve::arc_sweep(5.0, 10.0)),
        ]
    );
}

#[test]
fn test_group_points_preserve_child_order() {
    let shape = Shape::G(Group {
        shapes: vec![
            Shape::Circle(Circle::new(50.0, 50.0, 20.0)),
            Shape::Line(Line::new(10.0, 70.0, 50.0, 200.0)),
        ],
    });
    let expected = ShapePoints::Group(vec![
        Shape::Circle(Circle::new(50.0, 50.0, 20.0)).to_points().unwrap(),
        Shape::Line(Line::new(10.0, 70.0, 50.0, 200.0)).to_points().unwrap(),
    ]);
    assert_eq!(shape.to_points().unwrap(), expected);
}

#[test]
fn test_nested_group_points() {
    let shape = Shape::G(Group {
        shapes: vec![
            Shape::G(Group {
                shapes: vec![Shape::Line(Line::new(0.0, 0.0, 1.0, 1.0))],
            }),
            Shape::Line(Line::new(2.0, 2.0, 3.0, 3.0)),
        ],
    });
    match shape.to_points().unwrap() {
        ShapePoints::Group(children) => {
            assert!(matches!(children[0], ShapePoints::Group(_)));
            assert!(matches!(children[1], ShapePoints::Single(_)));
        }
        ShapePoints::Single(_) => panic!("expected nested groups"),
    }
}
