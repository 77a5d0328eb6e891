//! Unit tests for the vector helpers and the supporting matrix operations
//! (product, transpose, normal matrix) that the constructors build on.

#[cfg(test)]
mod tests {
    use crate::error::MathError;
    use crate::mat4::Matrix4;
    use crate::vec3;

    // ─── Helpers ─────────────────────────────────────────────────────────────

    const EPS: f32 = 1e-5;

    fn approx(a: f32, b: f32) -> bool { (a - b).abs() <= EPS }

    fn assert_slice_eq(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!(approx(*a, *e), "element {i}: got {a}, expected {e}\nactual:   {actual:?}\nexpected: {expected:?}");
        }
    }

    fn sample() -> Matrix4 {
        Matrix4::from_cols_array([
            1.0,  2.0,  3.0,  0.0,
            4.0,  5.0,  6.0,  0.0,
            7.0,  8.0, 10.0,  0.0,
            -1.0, 0.5,  2.0,  1.0,
        ])
    }

    // ─── vec3 ────────────────────────────────────────────────────────────────

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(vec3::cross([1., 0., 0.], [0., 1., 0.]), [0., 0., 1.]);
        assert_eq!(vec3::cross([0., 1., 0.], [0., 0., 1.]), [1., 0., 0.]);
        assert_eq!(vec3::cross([0., 0., 1.], [1., 0., 0.]), [0., 1., 0.]);
    }

    #[test]
    fn dot_and_length() {
        assert_eq!(vec3::dot([1., 2., 3.], [4., -5., 6.]), 12.0);
        assert_eq!(vec3::length([3., 4., 0.]), 5.0);
    }

    #[test]
    fn normalize_zero_is_none() {
        assert_eq!(vec3::normalize([0., 0., 0.]), None);
    }

    #[test]
    fn normalize_overflowing_length_is_none() {
        assert_eq!(vec3::normalize([3e38, 3e38, 0.]), None);
    }

    #[test]
    fn normalize_scales_to_unit() {
        let n = vec3::normalize([0., 3., 4.]).expect("non-zero vector");
        assert_slice_eq(&n, &[0.0, 0.6, 0.8]);
    }

    #[test]
    fn add_sub_scale() {
        assert_eq!(vec3::add([1., 2., 3.], [1., 1., 1.]), [2., 3., 4.]);
        assert_eq!(vec3::sub([1., 2., 3.], [1., 1., 1.]), [0., 1., 2.]);
        assert_eq!(vec3::scale([1., -2., 3.], 2.0), [2., -4., 6.]);
    }

    // ─── Layout ──────────────────────────────────────────────────────────────

    #[test]
    fn at_reads_column_major() {
        let m = sample();
        assert_eq!(m.at(0, 1), 4.0);
        assert_eq!(m.at(1, 0), 2.0);
        assert_eq!(m.at(2, 3), 2.0);
        assert_eq!(m.col(3), [-1.0, 0.5, 2.0, 1.0]);
        assert_eq!(m.translation(), [-1.0, 0.5, 2.0]);
    }

    #[test]
    fn cols_array_2d_groups_columns() {
        let cols = sample().to_cols_array_2d();
        assert_eq!(cols[0], [1.0, 2.0, 3.0, 0.0]);
        assert_eq!(cols[3], [-1.0, 0.5, 2.0, 1.0]);
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Matrix4::default(), Matrix4::identity());
    }

    #[test]
    fn repr_is_sixteen_floats() {
        assert_eq!(std::mem::size_of::<Matrix4>(), 16 * std::mem::size_of::<f32>());
    }

    // ─── Product / transpose ─────────────────────────────────────────────────

    #[test]
    fn product_applies_right_operand_first() {
        let t = Matrix4::identity().translate(5.0, 0.0, 0.0);
        let r = Matrix4::identity().rotate(90.0, 0.0, 0.0, 1.0).unwrap();

        // Rotate (1,0,0) to (0,1,0), then move by +5 on x.
        let p = (t * r).mul_vec4([1.0, 0.0, 0.0, 1.0]);
        assert_slice_eq(&p, &[5.0, 1.0, 0.0, 1.0]);

        // Move first, then rotate the moved point about the origin.
        let q = (r * t).mul_vec4([1.0, 0.0, 0.0, 1.0]);
        assert_slice_eq(&q, &[0.0, 6.0, 0.0, 1.0]);
    }

    #[test]
    fn transpose_twice_is_identity_op() {
        let m = sample();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().at(1, 0), m.at(0, 1));
    }

    #[test]
    fn mul_vec4_direction_ignores_translation() {
        let m = Matrix4::identity().translate(1.0, 2.0, 3.0);
        assert_eq!(m.mul_vec4([0.0, 1.0, 0.0, 0.0]), [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(m.mul_vec4([0.0, 1.0, 0.0, 1.0]), [1.0, 3.0, 3.0, 1.0]);
    }

    // ─── Normal matrix ───────────────────────────────────────────────────────

    #[test]
    fn normal_matrix_of_rotation_is_rotation() {
        let m = Matrix4::identity()
            .translate(3.0, -2.0, 7.0)
            .rotate(33.0, 1.0, 0.3, 0.5)
            .unwrap();
        let n = m.normal_matrix().unwrap();
        let c = m.to_cols_array();
        let upper = [c[0], c[1], c[2], c[4], c[5], c[6], c[8], c[9], c[10]];
        assert_slice_eq(&n, &upper);
    }

    #[test]
    fn normal_matrix_of_scale_inverts_scale() {
        let m = Matrix4::from_cols_array([
            2.0, 0.0, 0.0, 0.0,
            0.0, 4.0, 0.0, 0.0,
            0.0, 0.0, 8.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        let n = m.normal_matrix().unwrap();
        assert_slice_eq(&n, &[0.5, 0.0, 0.0, 0.0, 0.25, 0.0, 0.0, 0.0, 0.125]);
    }

    #[test]
    fn normal_matrix_of_shear_keeps_normals_perpendicular() {
        // x' = x + y shear: plane y = 0 has normal (0,1,0); its tangent (1,0,0)
        // stays (1,0,0) and the normal must stay perpendicular to it.
        let m = Matrix4::from_cols_array([
            1.0, 0.0, 0.0, 0.0,
            1.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        let n = m.normal_matrix().unwrap();
        let normal = [n[3], n[4], n[5]];
        assert!(approx(vec3::dot(normal, [1.0, 0.0, 0.0]), 0.0));
    }

    #[test]
    fn normal_matrix_of_tiny_uniform_scale() {
        let m = Matrix4::from_cols_array([
            1e-4, 0.0, 0.0, 0.0,
            0.0, 1e-4, 0.0, 0.0,
            0.0, 0.0, 1e-4, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        let n = m.normal_matrix().unwrap();
        for i in [0, 4, 8] {
            assert!((n[i] - 1e4).abs() <= 1e-1, "n[{i}] = {}", n[i]);
        }
    }

    #[test]
    fn normal_matrix_singular() {
        let m = Matrix4::from_cols_array([
            1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        assert_eq!(m.normal_matrix(), Err(MathError::Singular));
    }

    #[test]
    fn error_messages_name_the_argument() {
        let err = Matrix4::identity().rotate(10.0, 0.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument: rotation axis has zero length");
    }
}
